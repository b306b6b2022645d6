//! Memory bandwidth engine

use tracing::trace;

use crate::constants::memory as mem_const;
use crate::data::MemorySpec;

/// Theoretical transfer rate in MT/s
///
/// Every DDR generation is modeled with a 64-bit channel.
pub fn compute_memory_bandwidth(spec: &MemorySpec) -> f64 {
    let bandwidth = (spec.frequency_mhz as f64
        * mem_const::BITS_PER_CHANNEL
        * spec.channel_count as f64)
        / mem_const::BITS_PER_BYTE;

    trace!(
        kind = %spec.kind,
        frequency_mhz = spec.frequency_mhz,
        channels = spec.channel_count,
        bandwidth,
        "computed memory bandwidth"
    );

    bandwidth
}

/// Convert MT/s to GB/s for display and tiering
pub fn mts_to_gbs(mts: f64) -> f64 {
    mts / mem_const::MTS_PER_GBS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryType;

    fn spec(kind: MemoryType, frequency_mhz: u32, channel_count: u32) -> MemorySpec {
        MemorySpec { kind, frequency_mhz, channel_count }
    }

    #[test]
    fn test_ddr4_2666_dual_channel() {
        let bw = compute_memory_bandwidth(&spec(MemoryType::Ddr4, 2666, 2));
        assert_eq!(bw, 42_656.0);
        assert!((mts_to_gbs(bw) - 42.656).abs() < 1e-9);
    }

    #[test]
    fn test_generation_does_not_change_bus_width() {
        let ddr3 = compute_memory_bandwidth(&spec(MemoryType::Ddr3, 3200, 2));
        let ddr5 = compute_memory_bandwidth(&spec(MemoryType::Ddr5, 3200, 2));
        assert_eq!(ddr3, ddr5);
    }

    #[test]
    fn test_scales_linearly_with_channels() {
        let single = compute_memory_bandwidth(&spec(MemoryType::Ddr5, 6400, 1));
        let quad = compute_memory_bandwidth(&spec(MemoryType::Ddr5, 6400, 4));
        assert_eq!(single, 51_200.0);
        assert_eq!(quad, single * 4.0);
    }

    #[test]
    fn test_spec_bandwidth_delegates() {
        let s = spec(MemoryType::Ddr4, 3200, 2);
        assert_eq!(s.bandwidth(), compute_memory_bandwidth(&s));
    }

    #[test]
    fn test_zero_channels() {
        assert_eq!(compute_memory_bandwidth(&spec(MemoryType::Ddr4, 3200, 0)), 0.0);
    }
}
