/*
 * Responsibility
 * - /health 用のプロセスメモリ snapshot
 * - /proc/self/status からの best-effort 読み取り (取れなければ 0)
 */
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct MemoryStats {
    pub rss_bytes: u64,
    pub vm_bytes: u64,
}

/// Best-effort snapshot of the process's resident and virtual memory.
/// Missing or unparseable fields stay at zero, never an error.
pub fn memory_snapshot() -> MemoryStats {
    let Ok(status) = std::fs::read_to_string("/proc/self/status") else {
        return MemoryStats::default();
    };

    let mut stats = MemoryStats::default();
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmRSS:") {
            stats.rss_bytes = parse_kib(rest);
        } else if let Some(rest) = line.strip_prefix("VmSize:") {
            stats.vm_bytes = parse_kib(rest);
        }
    }
    stats
}

// Lines look like "VmRSS:      1234 kB".
fn parse_kib(rest: &str) -> u64 {
    rest.trim()
        .split_whitespace()
        .next()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(0, |kib| kib * 1024)
}
