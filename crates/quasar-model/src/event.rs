use std::{fmt, iter, sync::Arc};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Kinds of kernel events the schema describes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Capset,
    Chmod,
    Chown,
    Exec,
    Link,
    Mkdir,
    Open,
    Removexattr,
    Rename,
    Rmdir,
    Setgid,
    Setuid,
    Setxattr,
    Unlink,
    Utimes,
}

/// Inode level attributes of a file, plus the identities and paths resolved
/// for it at capture time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFields {
    pub inode: u64,
    pub mount_id: u32,
    pub uid: u32,
    pub gid: u32,
    pub user: String,
    pub group: String,
    pub mode: u16,
    pub overlay_numlower: i32,
    pub name: String,
    pub path: String,
    pub container_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyscallEvent {
    pub retval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub uid: u32,
    pub gid: u32,
    pub euid: u32,
    pub egid: u32,
    pub fsuid: u32,
    pub fsgid: u32,
    pub user: String,
    pub group: String,
    pub euser: String,
    pub egroup: String,
    pub fsuser: String,
    pub fsgroup: String,
    pub cap_effective: u64,
    pub cap_permitted: u64,
}

/// Executable and credentials of a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub file: FileFields,
    pub ppid: u32,
    pub cookie: u32,
    pub comm: String,
    pub tty_name: String,
    pub credentials: Credentials,
}

/// Process that triggered an event, linked to its cached lineage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessContext {
    pub pid: u32,
    pub tid: u32,
    pub process: Process,
    /// Nearest cached ancestor. Chains are shared with the process cache, so they
    /// are never modified in place.
    pub ancestor: Option<Arc<ProcessCacheEntry>>,
}

impl ProcessContext {
    pub fn ancestor(&self) -> Option<&ProcessCacheEntry> {
        self.ancestor.as_deref()
    }

    /// Nearest ancestor, writable. A placeholder entry is allocated when the
    /// chain is empty, and a shared entry is copied before being handed out.
    pub fn ancestor_mut(&mut self) -> &mut ProcessCacheEntry {
        Arc::make_mut(self.ancestor.get_or_insert_with(Default::default))
    }

    /// Walk the lineage, parent first, root last.
    pub fn ancestors(&self) -> impl Iterator<Item = &ProcessCacheEntry> {
        iter::successors(self.ancestor(), |entry| entry.process_context.ancestor())
    }
}

/// Entry of the process cache: a process as it was seen, with its container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessCacheEntry {
    pub process_context: ProcessContext,
    pub container_context: ContainerContext,
}

impl ProcessCacheEntry {
    /// Link `entries`, ordered from the nearest parent to the root, into a
    /// chain. The `ancestor` of every given entry is replaced.
    pub fn lineage(entries: impl IntoIterator<Item = ProcessCacheEntry>) -> Option<Arc<Self>> {
        let entries: Vec<_> = entries.into_iter().collect();

        entries.into_iter().rev().fold(None, |parent, mut entry| {
            entry.process_context.ancestor = parent;
            Some(Arc::new(entry))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerContext {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapsetEvent {
    pub cap_effective: u64,
    pub cap_permitted: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChmodEvent {
    pub syscall: SyscallEvent,
    pub file: FileFields,
    pub mode: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChownEvent {
    pub syscall: SyscallEvent,
    pub file: FileFields,
    pub uid: i32,
    pub user: String,
    pub gid: i32,
    pub group: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecEvent {
    pub process: Process,
    pub args: Vec<String>,
    pub args_truncated: bool,
    pub envs: Vec<String>,
    pub envs_truncated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEvent {
    pub syscall: SyscallEvent,
    pub source: FileFields,
    pub target: FileFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MkdirEvent {
    pub syscall: SyscallEvent,
    pub file: FileFields,
    pub mode: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenEvent {
    pub syscall: SyscallEvent,
    pub file: FileFields,
    pub flags: u32,
    pub mode: u32,
}

/// Extended attribute change, shared by `setxattr` and `removexattr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetXAttrEvent {
    pub syscall: SyscallEvent,
    pub file: FileFields,
    pub namespace: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEvent {
    pub syscall: SyscallEvent,
    pub old: FileFields,
    pub new: FileFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RmdirEvent {
    pub syscall: SyscallEvent,
    pub file: FileFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlinkEvent {
    pub syscall: SyscallEvent,
    pub file: FileFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtimesEvent {
    pub syscall: SyscallEvent,
    pub file: FileFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetuidEvent {
    pub uid: u32,
    pub user: String,
    pub euid: u32,
    pub euser: String,
    pub fsuid: u32,
    pub fsuser: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetgidEvent {
    pub gid: u32,
    pub group: String,
    pub egid: u32,
    pub egroup: String,
    pub fsgid: u32,
    pub fsgroup: String,
}

/// One captured kernel event.
///
/// The process and container contexts are always meaningful. Of the per kind
/// sections only the one matching `event_type` is, the others stay at their
/// default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: Option<EventType>,
    pub process_context: ProcessContext,
    pub container_context: ContainerContext,
    pub capset: CapsetEvent,
    pub chmod: ChmodEvent,
    pub chown: ChownEvent,
    pub exec: ExecEvent,
    pub link: LinkEvent,
    pub mkdir: MkdirEvent,
    pub open: OpenEvent,
    pub removexattr: SetXAttrEvent,
    pub rename: RenameEvent,
    pub rmdir: RmdirEvent,
    pub setgid: SetgidEvent,
    pub setuid: SetuidEvent,
    pub setxattr: SetXAttrEvent,
    pub unlink: UnlinkEvent,
    pub utimes: UtimesEvent,
}

impl Event {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type: Some(event_type),
            ..Default::default()
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self
            .event_type
            .map_or("unknown", |event_type| event_type.into());
        let pid = self.process_context.pid;
        let comm = &self.process_context.process.comm;

        if self.container_context.id.is_empty() {
            write!(f, "[{kind}] {comm} ({pid})")
        } else {
            let container = &self.container_context.id;
            write!(f, "[{kind}] {container} {comm} ({pid})")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    fn entry(pid: u32) -> ProcessCacheEntry {
        let mut entry = ProcessCacheEntry::default();
        entry.process_context.pid = pid;
        entry
    }

    #[test]
    fn event_type_names() {
        assert_eq!(EventType::Removexattr.to_string(), "removexattr");
        assert_eq!(EventType::from_str("chmod").unwrap(), EventType::Chmod);
        assert!(EventType::from_str("process").is_err());
        assert_eq!(EventType::iter().count(), 15);
    }

    #[test]
    fn lineage_is_nearest_first() {
        let event = ProcessContext {
            ancestor: ProcessCacheEntry::lineage([entry(3), entry(2), entry(1)]),
            ..Default::default()
        };

        let pids: Vec<u32> = event
            .ancestors()
            .map(|entry| entry.process_context.pid)
            .collect();
        assert_eq!(pids, vec![3, 2, 1]);
    }

    #[test]
    fn empty_lineage() {
        assert!(ProcessCacheEntry::lineage(Vec::<ProcessCacheEntry>::new()).is_none());
        assert_eq!(ProcessContext::default().ancestors().count(), 0);
    }

    #[test]
    fn ancestor_mut_allocates_once() {
        let mut context = ProcessContext::default();
        context.ancestor_mut().process_context.pid = 10;
        context.ancestor_mut().process_context.tid = 11;

        assert_eq!(context.ancestors().count(), 1);
        let ancestor = context.ancestor().unwrap();
        assert_eq!(ancestor.process_context.pid, 10);
        assert_eq!(ancestor.process_context.tid, 11);
    }

    #[test]
    fn ancestor_mut_copies_shared_chain() {
        let shared = ProcessCacheEntry::lineage([entry(7)]);
        let mut context = ProcessContext {
            ancestor: shared.clone(),
            ..Default::default()
        };

        context.ancestor_mut().process_context.pid = 8;

        assert_eq!(shared.unwrap().process_context.pid, 7);
        assert_eq!(context.ancestor().unwrap().process_context.pid, 8);
    }

    #[test]
    fn display() {
        let mut event = Event::new(EventType::Open);
        event.process_context.pid = 42;
        event.process_context.process.comm = "cat".to_string();
        assert_eq!(event.to_string(), "[open] cat (42)");
    }
}
