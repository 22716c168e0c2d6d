//! Formatting for the diagnostics report. Everything goes to stdout; the
//! layout follows one fixed section order per agent: identity, type block,
//! memory banks, memory pools, caches, peer links.

use hsa::agent::{Agent, DeviceType};
use hsa::error::HsaResult;
use hsa::memory::RegionSegment;
use hsa::system::SystemInfo;
use humansize::{format_size, BINARY};
use tracing::warn;

pub fn print_banner() {
    println!("============================================================");
    println!("                 HSA Runtime - Diagnostics                  ");
    println!("============================================================");
}

pub fn print_system_info(info: &SystemInfo) {
    println!(
        "[+] HSA Interface Version: {}.{}",
        info.version_major, info.version_minor
    );
    println!("    Machine Model:  {}", info.machine_model.as_str());
    println!("    Endianness:     {}", info.endianness.as_str());
    println!("    Timestamp Freq: {} Hz", info.timestamp_frequency);
}

/// Marketing name when the runtime has one, ISA-style name otherwise.
fn pick_display_name(product_name: &str, name: &str) -> String {
    if product_name.is_empty() {
        name.to_string()
    } else {
        product_name.to_string()
    }
}

fn bank_row(index: usize, label: &str, size_bytes: usize) -> String {
    format!(
        "[{}] {:<20} Size: {} MB",
        index,
        label,
        size_bytes / 1024 / 1024
    )
}

fn pool_row(index: usize, flags: &str, size_bytes: usize, granule: usize, alloc: bool) -> String {
    format!(
        "[{}] {:<22} Size: {:<10} Granule: {:<8} Alloc: {}",
        index,
        flags,
        format_size(size_bytes, BINARY),
        format_size(granule, BINARY),
        if alloc { "yes" } else { "no" }
    )
}

fn cache_row(level: u8, size_bytes: u32) -> String {
    if size_bytes == 0 {
        format!("L{} Size: Unknown (Reported 0)", level)
    } else {
        format!("L{} Size: {} KB", level, size_bytes / 1024)
    }
}

fn link_row(node_id: u32, link_type: &str, hops: u32, min_bw: u32, max_bw: u32) -> String {
    format!(
        "-> Node {:<2} | {:<6} | Hops: {:<2} | Bandwidth: {} - {} MB/s",
        node_id, link_type, hops, min_bw, max_bw
    )
}

pub fn print_agent(agent: &Agent, agents: &[Agent]) -> HsaResult<()> {
    let name = agent.name()?;
    let product_name = agent.product_name().unwrap_or_default();
    let device_type = agent.device_type()?;
    let node_id = agent.node_id()?;

    println!();
    println!("------------------------------------------------------------");
    println!(" Node {} ({})", node_id, pick_display_name(&product_name, &name));
    println!("------------------------------------------------------------");

    if device_type == DeviceType::Gpu {
        let gpu = agent.gpu_info()?;

        println!("    Type:          GPU");
        println!("    Vendor:        {}", agent.vendor_name()?);
        println!("    Compute Units: {}", gpu.compute_units);
        println!("    SIMDs:         {}", gpu.total_simds());
        println!("    Waves/SIMD:    {}", gpu.waves_per_simd());
        println!("    Wavefront:     {} lanes", agent.wavefront_size()?);
        println!("    Chip ID:       {:#x}", gpu.chip_id);
        println!(
            "    Location ID:   {:#x} (Domain: {})",
            gpu.bdf_id, gpu.domain
        );

        if agent.is_kernel_dispatch()? {
            println!(
                "    Queues:        {} (max {} packets)",
                agent.queues_max()?,
                agent.queue_max_size()?
            );
        }
    } else {
        println!("    Type:          {}", device_type.as_str());
    }

    print_memory_banks(agent)?;
    print_memory_pools(agent)?;
    print_caches(agent)?;
    print_peer_links(agent, agents)?;

    Ok(())
}

// Only GLOBAL-segment regions count as banks, indexed per agent
fn print_memory_banks(agent: &Agent) -> HsaResult<()> {
    println!();
    println!("    Memory Banks:");

    let mut index = 0;

    for region in agent.regions()? {
        let segment = region.segment()?;
        let host_accessible = region.host_accessible()?;

        if segment != RegionSegment::Global {
            continue;
        }

        println!(
            "      {}",
            bank_row(index, segment.label(host_accessible), region.size()?)
        );
        index += 1;
    }

    Ok(())
}

fn print_memory_pools(agent: &Agent) -> HsaResult<()> {
    println!();
    println!("    Memory Pools:");

    let mut index = 0;

    for pool in agent.memory_pools()? {
        if !pool.is_global()? {
            continue;
        }

        println!(
            "      {}",
            pool_row(
                index,
                &pool.global_flags()?.describe(),
                pool.size()?,
                pool.alloc_granule()?,
                pool.alloc_allowed()?,
            )
        );
        index += 1;
    }

    Ok(())
}

fn print_caches(agent: &Agent) -> HsaResult<()> {
    println!();
    println!("    Caches:");

    for cache in agent.caches()? {
        println!("      {}", cache_row(cache.level()?, cache.size()?));
    }

    Ok(())
}

fn print_peer_links(agent: &Agent, agents: &[Agent]) -> HsaResult<()> {
    println!();
    println!("    Peer Links:");

    for peer in agents.iter() {
        if peer == agent {
            continue;
        }

        let Some(pool) = peer
            .memory_pools()?
            .into_iter()
            .find(|p| p.is_global().unwrap_or(false))
        else {
            continue;
        };

        match pool.link_from(agent) {
            Ok(Some(link)) => {
                println!(
                    "      {}",
                    link_row(
                        peer.node_id()?,
                        link.link_type_str(),
                        link.hops,
                        link.min_bandwidth,
                        link.max_bandwidth,
                    )
                );
            }
            // No hops reported means no direct path, skip the pair
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "peer link query failed");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_display_name_prefers_product() {
        assert_eq!(pick_display_name("Radeon RX 7900", "gfx1100"), "Radeon RX 7900");
        assert_eq!(pick_display_name("", "gfx1100"), "gfx1100");
    }

    #[test]
    fn test_bank_row_scales_to_mb() {
        assert_eq!(
            bank_row(0, "System", 64 * 1024 * 1024 * 1024),
            "[0] System               Size: 65536 MB"
        );
    }

    #[test]
    fn test_cache_row_known_size() {
        assert_eq!(cache_row(1, 32 * 1024), "L1 Size: 32 KB");
    }

    #[test]
    fn test_cache_row_zero_size() {
        assert_eq!(cache_row(3, 0), "L3 Size: Unknown (Reported 0)");
    }

    #[test]
    fn test_link_row_layout() {
        assert_eq!(
            link_row(1, "PCIe", 1, 16000, 32000),
            "-> Node 1  | PCIe   | Hops: 1  | Bandwidth: 16000 - 32000 MB/s"
        );
    }

    #[test]
    fn test_pool_row_layout() {
        let row = pool_row(0, "Fine Grained, KernArg", 2 * 1024 * 1024 * 1024, 4096, true);

        assert!(row.starts_with("[0] Fine Grained, KernArg "));
        assert!(row.contains("Size: 2 GiB"));
        assert!(row.contains("Granule: 4 KiB"));
        assert!(row.ends_with("Alloc: yes"));
    }
}
