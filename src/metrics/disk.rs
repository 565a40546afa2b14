use sysinfo::{Disk, Disks};

use super::round2;

const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Filesystems that back network or optical mounts; neither counts as a
/// local fixed volume.
const NETWORK_FILESYSTEMS: &[&str] = &[
    "nfs", "nfs4", "cifs", "smb", "smbfs", "smb2", "sshfs", "fuse.sshfs", "9p",
];
const OPTICAL_FILESYSTEMS: &[&str] = &["iso9660", "udf"];

pub struct DiskReader {
    disks: Disks,
}

impl DiskReader {
    pub fn new() -> Self {
        Self {
            disks: Disks::new_with_refreshed_list(),
        }
    }

    /// Returns one snapshot per local fixed volume, in enumeration order.
    /// Removable, network and optical volumes are skipped. An empty result
    /// is valid (a host with no fixed volumes).
    pub fn read(&mut self) -> Vec<DiskSnapshot> {
        self.disks.refresh();
        self.disks
            .iter()
            .filter(|disk| is_fixed(disk))
            .map(|disk| {
                DiskSnapshot::from_bytes(
                    disk.mount_point().to_string_lossy().to_string(),
                    disk.total_space(),
                    disk.available_space(),
                )
            })
            .collect()
    }
}

impl Default for DiskReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_fixed(disk: &Disk) -> bool {
    !disk.is_removable() && is_fixed_filesystem(&disk.file_system().to_string_lossy())
}

fn is_fixed_filesystem(filesystem: &str) -> bool {
    let filesystem = filesystem.to_ascii_lowercase();
    !NETWORK_FILESYSTEMS.contains(&filesystem.as_str())
        && !OPTICAL_FILESYSTEMS.contains(&filesystem.as_str())
}

#[derive(Debug, Clone)]
pub struct DiskSnapshot {
    pub name: String,
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub percent_used: f64,
}

impl DiskSnapshot {
    /// Same derivation as the memory snapshot: sizes rounded to 2 decimals,
    /// used = total - free, percent guarded against a zero total.
    pub fn from_bytes(name: String, total: u64, available: u64) -> Self {
        let total_gb = round2(total as f64 / BYTES_PER_GB);
        let free_gb = round2(available as f64 / BYTES_PER_GB);
        let used_gb = round2(total_gb - free_gb);

        let percent_used = if total_gb == 0.0 {
            0.0
        } else {
            round2(used_gb / total_gb * 100.0)
        };

        Self {
            name,
            total_gb,
            used_gb,
            free_gb,
            percent_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_guards_percent() {
        let snapshot = DiskSnapshot::from_bytes("/empty".to_string(), 0, 0);
        assert_eq!(snapshot.percent_used, 0.0);
        assert_eq!(snapshot.free_gb, 0.0);
    }

    #[test]
    fn test_sizes_in_gigabytes() {
        let total = 100 * 1024 * 1024 * 1024u64;
        let available = 25 * 1024 * 1024 * 1024u64;
        let snapshot = DiskSnapshot::from_bytes("/".to_string(), total, available);
        assert_eq!(snapshot.total_gb, 100.0);
        assert_eq!(snapshot.free_gb, 25.0);
        assert_eq!(snapshot.used_gb, 75.0);
        assert_eq!(snapshot.percent_used, 75.0);
    }

    #[test]
    fn test_network_and_optical_filesystems_are_not_fixed() {
        assert!(!is_fixed_filesystem("nfs"));
        assert!(!is_fixed_filesystem("NFS4"));
        assert!(!is_fixed_filesystem("cifs"));
        assert!(!is_fixed_filesystem("iso9660"));
        assert!(!is_fixed_filesystem("udf"));
    }

    #[test]
    fn test_local_filesystems_are_fixed() {
        assert!(is_fixed_filesystem("ext4"));
        assert!(is_fixed_filesystem("xfs"));
        assert!(is_fixed_filesystem("btrfs"));
        assert!(is_fixed_filesystem("ntfs"));
        assert!(is_fixed_filesystem("apfs"));
    }

    #[test]
    fn test_live_read_does_not_panic() {
        let mut reader = DiskReader::new();
        for snapshot in reader.read() {
            assert!(snapshot.percent_used.is_finite());
            assert!(snapshot.free_gb >= 0.0);
        }
    }
}
