use crate::{FsMetaError, Result};
use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::PathBuf;
use uzers::{get_group_by_gid, get_user_by_uid};

/// Entry type derived from the lstat file type. Symlinks are reported as
/// symlinks, never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    File,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Unknown,
}

/// Snapshot of one directory entry at stat time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Bare entry name
    pub name: String,
    /// Directory-joined path
    pub path: String,
    /// File size (bytes)
    pub size: i64,
    /// Owner name, or "unknown" if the uid has no mapping
    pub owner: String,
    /// Group name, or "unknown" if the gid has no mapping
    pub group: String,
    pub uid: u32,
    pub gid: u32,
    /// 3-digit octal permission string, e.g. "644"
    pub permissions: String,
    /// 10-character symbolic string, e.g. "-rw-r--r--"
    pub permissions_readable: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Modification time (Unix timestamp, seconds)
    pub modified: i64,
    /// Access time (Unix timestamp, seconds)
    pub accessed: i64,
    /// Status-change time (Unix timestamp, seconds)
    pub changed: i64,
    pub inode: u64,
    /// Device id as a decimal string, to avoid precision loss in consumers
    pub device: String,
    pub hard_links: u64,
    pub block_size: i64,
    pub blocks: i64,
}

/// Stat a single entry and build its record. The path is not followed if it
/// is a symlink. Identity lookups never fail the record; classification of
/// an unrecognized mode never fails the record. The only failure is the
/// stat call itself.
pub fn stat_entry(name: &str, path: &str) -> Result<FileRecord> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(_) => return Err(FsMetaError::Stat(PathBuf::from(path))),
    };
    Ok(build_record(name, path, &metadata))
}

fn build_record(name: &str, path: &str, metadata: &Metadata) -> FileRecord {
    let mode = metadata.mode();
    let file_type = classify(metadata.file_type());

    FileRecord {
        name: name.to_string(),
        path: path.to_string(),
        size: metadata.size() as i64,
        owner: owner_name(metadata.uid()),
        group: group_name(metadata.gid()),
        uid: metadata.uid(),
        gid: metadata.gid(),
        permissions: octal_permissions(mode),
        permissions_readable: symbolic_permissions(file_type, mode),
        file_type,
        modified: metadata.mtime(),
        accessed: metadata.atime(),
        changed: metadata.ctime(),
        inode: metadata.ino(),
        device: metadata.dev().to_string(),
        hard_links: metadata.nlink(),
        block_size: metadata.blksize() as i64,
        blocks: metadata.blocks() as i64,
    }
}

fn classify(ft: std::fs::FileType) -> FileType {
    if ft.is_dir() {
        FileType::Directory
    } else if ft.is_file() {
        FileType::File
    } else if ft.is_symlink() {
        FileType::Symlink
    } else if ft.is_char_device() {
        FileType::CharDevice
    } else if ft.is_block_device() {
        FileType::BlockDevice
    } else if ft.is_fifo() {
        FileType::Fifo
    } else if ft.is_socket() {
        FileType::Socket
    } else {
        FileType::Unknown
    }
}

fn owner_name(uid: u32) -> String {
    match get_user_by_uid(uid) {
        Some(user) => user.name().to_string_lossy().into_owned(),
        None => "unknown".to_string(),
    }
}

fn group_name(gid: u32) -> String {
    match get_group_by_gid(gid) {
        Some(group) => group.name().to_string_lossy().into_owned(),
        None => "unknown".to_string(),
    }
}

fn octal_permissions(mode: u32) -> String {
    format!("{:03o}", mode & 0o777)
}

fn type_char(file_type: FileType) -> char {
    match file_type {
        FileType::Directory => 'd',
        FileType::Symlink => 'l',
        FileType::CharDevice => 'c',
        FileType::BlockDevice => 'b',
        FileType::Fifo => 'p',
        FileType::Socket => 's',
        FileType::File | FileType::Unknown => '-',
    }
}

// Type char, then user/group/other x read/write/execute in fixed order.
// Consumers compare this string byte-for-byte.
fn symbolic_permissions(file_type: FileType, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(type_char(file_type));
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}
