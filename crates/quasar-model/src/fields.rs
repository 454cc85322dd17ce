//! Field table of the schema.
//!
//! Every field path is declared once, with its scope and its kind, next to the
//! attribute it reads. The table expands into plain `match` statements, so path
//! resolution needs no reflection and every accessor is checked by the compiler
//! against the struct layout.
//!
//! Scopes:
//! - `scalar`: attribute of the event itself.
//! - `args`, `envs`: the element of `exec.args` or `exec.envs` bound to a register.
//! - `ancestors`: attribute of the ancestor entry bound to a register, the path is
//!   relative to [ProcessCacheEntry](crate::ProcessCacheEntry).

use std::str::FromStr;

use quasar_eval::{
    ANY_EVENT_TYPE, Accessors, BoolEvaluator, Context, EvalError, Evaluator, FieldType,
    FieldValue, IntEvaluator, Integer, RegisterId, Result, StringEvaluator, Weight,
};

use crate::{Element, Event, EventType, IteratorKind};

macro_rules! field_table {
    (@type int) => { FieldType::Integer };
    (@type string) => { FieldType::String };
    (@type bool) => { FieldType::Boolean };

    (@iterator scalar) => { None };
    (@iterator args) => { Some(IteratorKind::ExecArgs) };
    (@iterator envs) => { Some(IteratorKind::ExecEnvs) };
    (@iterator ancestors) => { Some(IteratorKind::ProcessAncestors) };

    (@evaluator $path:literal, scalar, int, $register:ident, ($($place:ident).+)) => {
        Evaluator::Int(IntEvaluator::<Event>::new($path, Weight::Direct, |ctx| {
            Integer::to_int(ctx.event().$($place).+)
        }))
    };
    (@evaluator $path:literal, scalar, string, $register:ident, ($($place:ident).+)) => {
        Evaluator::String(StringEvaluator::<Event>::new($path, Weight::Resolved, |ctx| {
            ctx.event().$($place).+.as_str()
        }))
    };
    (@evaluator $path:literal, scalar, bool, $register:ident, ($($place:ident).+)) => {
        Evaluator::Bool(BoolEvaluator::<Event>::new($path, Weight::Direct, |ctx| {
            ctx.event().$($place).+
        }))
    };
    (@evaluator $path:literal, args, string, $register:ident, ($($place:ident).+)) => {
        field_table!(@element $path, $register)
    };
    (@evaluator $path:literal, envs, string, $register:ident, ($($place:ident).+)) => {
        field_table!(@element $path, $register)
    };
    (@evaluator $path:literal, ancestors, int, $register:ident, ($($place:ident).+)) => {
        Evaluator::Int(IntEvaluator::<Event>::new($path, Weight::Iterator, move |ctx| {
            match ctx.register($register) {
                Some(Element::Ancestor(entry)) => Integer::to_int(entry.$($place).+),
                _ => 0,
            }
        }))
    };
    (@evaluator $path:literal, ancestors, string, $register:ident, ($($place:ident).+)) => {
        Evaluator::String(StringEvaluator::<Event>::new($path, Weight::Iterator, move |ctx| {
            match ctx.register($register) {
                Some(Element::Ancestor(entry)) => entry.$($place).+.as_str(),
                _ => "",
            }
        }))
    };
    (@element $path:literal, $register:ident) => {
        Evaluator::String(StringEvaluator::<Event>::new($path, Weight::Iterator, move |ctx| {
            match ctx.register($register) {
                Some(Element::Str(value)) => value,
                _ => "",
            }
        }))
    };

    (@set scalar, int, $event:ident, $value:ident, ($($place:ident).+)) => {{
        let converted = $value.into_int(&[$(stringify!($place)),+])?;
        $event.$($place).+ = converted;
    }};
    (@set scalar, string, $event:ident, $value:ident, ($($place:ident).+)) => {{
        let converted = $value.into_string(&[$(stringify!($place)),+])?;
        $event.$($place).+ = converted;
    }};
    (@set scalar, bool, $event:ident, $value:ident, ($($place:ident).+)) => {{
        let converted = $value.into_bool(&[$(stringify!($place)),+])?;
        $event.$($place).+ = converted;
    }};
    (@set args, string, $event:ident, $value:ident, ($($place:ident).+)) => {{
        let converted = $value.into_string(&[$(stringify!($place)),+])?;
        $event.$($place).+.push(converted);
    }};
    (@set envs, string, $event:ident, $value:ident, ($($place:ident).+)) => {{
        let converted = $value.into_string(&[$(stringify!($place)),+])?;
        $event.$($place).+.push(converted);
    }};
    (@set ancestors, int, $event:ident, $value:ident, ($($place:ident).+)) => {{
        let converted = $value.into_int(&["process_context", "ancestor", $(stringify!($place)),+])?;
        $event.process_context.ancestor_mut().$($place).+ = converted;
    }};
    (@set ancestors, string, $event:ident, $value:ident, ($($place:ident).+)) => {{
        let converted = $value.into_string(&["process_context", "ancestor", $(stringify!($place)),+])?;
        $event.process_context.ancestor_mut().$($place).+ = converted;
    }};

    ( $( $path:literal => $scope:ident $kind:ident ( $($place:ident).+ ) ),* $(,)? ) => {
        /// All field paths, sorted.
        pub const FIELDS: &[&str] = &[ $( $path ),* ];

        /// Evaluator reading `field`, bound to `register` if the field is
        /// iterator-scoped.
        pub fn evaluator(field: &str, register: RegisterId) -> Result<Evaluator<Event>> {
            let evaluator = match field {
                $( $path => field_table!(@evaluator $path, $scope, $kind, register, ($($place).+)), )*
                _ => return Err(EvalError::FieldNotFound(field.to_string())),
            };
            Ok(evaluator)
        }

        pub fn field_type(field: &str) -> Result<FieldType> {
            match field {
                $( $path => Ok(field_table!(@type $kind)), )*
                _ => Err(EvalError::FieldNotFound(field.to_string())),
            }
        }

        /// Repeated attribute `field` is reached through, if any.
        pub fn iterator_kind(field: &str) -> Result<Option<IteratorKind>> {
            match field {
                $( $path => Ok(field_table!(@iterator $scope)), )*
                _ => Err(EvalError::FieldNotFound(field.to_string())),
            }
        }

        fn set(event: &mut Event, field: &str, value: FieldValue) -> Result<()> {
            match field {
                $( $path => field_table!(@set $scope, $kind, event, value, ($($place).+)), )*
                _ => return Err(EvalError::FieldNotFound(field.to_string())),
            }
            Ok(())
        }
    };
}

field_table! {
    "capset.cap_effective" => scalar int(capset.cap_effective),
    "capset.cap_permitted" => scalar int(capset.cap_permitted),
    "chmod.file.container_path" => scalar string(chmod.file.container_path),
    "chmod.file.destination.mode" => scalar int(chmod.mode),
    "chmod.file.gid" => scalar int(chmod.file.gid),
    "chmod.file.group" => scalar string(chmod.file.group),
    "chmod.file.inode" => scalar int(chmod.file.inode),
    "chmod.file.mode" => scalar int(chmod.file.mode),
    "chmod.file.mount_id" => scalar int(chmod.file.mount_id),
    "chmod.file.name" => scalar string(chmod.file.name),
    "chmod.file.overlay_numlower" => scalar int(chmod.file.overlay_numlower),
    "chmod.file.path" => scalar string(chmod.file.path),
    "chmod.file.uid" => scalar int(chmod.file.uid),
    "chmod.file.user" => scalar string(chmod.file.user),
    "chmod.retval" => scalar int(chmod.syscall.retval),
    "chown.file.container_path" => scalar string(chown.file.container_path),
    "chown.file.destination.gid" => scalar int(chown.gid),
    "chown.file.destination.group" => scalar string(chown.group),
    "chown.file.destination.uid" => scalar int(chown.uid),
    "chown.file.destination.user" => scalar string(chown.user),
    "chown.file.gid" => scalar int(chown.file.gid),
    "chown.file.group" => scalar string(chown.file.group),
    "chown.file.inode" => scalar int(chown.file.inode),
    "chown.file.mode" => scalar int(chown.file.mode),
    "chown.file.mount_id" => scalar int(chown.file.mount_id),
    "chown.file.name" => scalar string(chown.file.name),
    "chown.file.overlay_numlower" => scalar int(chown.file.overlay_numlower),
    "chown.file.path" => scalar string(chown.file.path),
    "chown.file.uid" => scalar int(chown.file.uid),
    "chown.file.user" => scalar string(chown.file.user),
    "chown.retval" => scalar int(chown.syscall.retval),
    "container.id" => scalar string(container_context.id),
    "exec.args" => args string(exec.args),
    "exec.args_truncated" => scalar bool(exec.args_truncated),
    "exec.cap_effective" => scalar int(exec.process.credentials.cap_effective),
    "exec.cap_permitted" => scalar int(exec.process.credentials.cap_permitted),
    "exec.comm" => scalar string(exec.process.comm),
    "exec.cookie" => scalar int(exec.process.cookie),
    "exec.egid" => scalar int(exec.process.credentials.egid),
    "exec.egroup" => scalar string(exec.process.credentials.egroup),
    "exec.envs" => envs string(exec.envs),
    "exec.envs_truncated" => scalar bool(exec.envs_truncated),
    "exec.euid" => scalar int(exec.process.credentials.euid),
    "exec.euser" => scalar string(exec.process.credentials.euser),
    "exec.file.container_path" => scalar string(exec.process.file.container_path),
    "exec.file.gid" => scalar int(exec.process.file.gid),
    "exec.file.group" => scalar string(exec.process.file.group),
    "exec.file.inode" => scalar int(exec.process.file.inode),
    "exec.file.mode" => scalar int(exec.process.file.mode),
    "exec.file.mount_id" => scalar int(exec.process.file.mount_id),
    "exec.file.name" => scalar string(exec.process.file.name),
    "exec.file.overlay_numlower" => scalar int(exec.process.file.overlay_numlower),
    "exec.file.path" => scalar string(exec.process.file.path),
    "exec.file.uid" => scalar int(exec.process.file.uid),
    "exec.file.user" => scalar string(exec.process.file.user),
    "exec.fsgid" => scalar int(exec.process.credentials.fsgid),
    "exec.fsgroup" => scalar string(exec.process.credentials.fsgroup),
    "exec.fsuid" => scalar int(exec.process.credentials.fsuid),
    "exec.fsuser" => scalar string(exec.process.credentials.fsuser),
    "exec.gid" => scalar int(exec.process.credentials.gid),
    "exec.group" => scalar string(exec.process.credentials.group),
    "exec.ppid" => scalar int(exec.process.ppid),
    "exec.tty_name" => scalar string(exec.process.tty_name),
    "exec.uid" => scalar int(exec.process.credentials.uid),
    "exec.user" => scalar string(exec.process.credentials.user),
    "link.file.container_path" => scalar string(link.source.container_path),
    "link.file.destination.container_path" => scalar string(link.target.container_path),
    "link.file.destination.gid" => scalar int(link.target.gid),
    "link.file.destination.group" => scalar string(link.target.group),
    "link.file.destination.inode" => scalar int(link.target.inode),
    "link.file.destination.mode" => scalar int(link.target.mode),
    "link.file.destination.mount_id" => scalar int(link.target.mount_id),
    "link.file.destination.name" => scalar string(link.target.name),
    "link.file.destination.overlay_numlower" => scalar int(link.target.overlay_numlower),
    "link.file.destination.path" => scalar string(link.target.path),
    "link.file.destination.uid" => scalar int(link.target.uid),
    "link.file.destination.user" => scalar string(link.target.user),
    "link.file.gid" => scalar int(link.source.gid),
    "link.file.group" => scalar string(link.source.group),
    "link.file.inode" => scalar int(link.source.inode),
    "link.file.mode" => scalar int(link.source.mode),
    "link.file.mount_id" => scalar int(link.source.mount_id),
    "link.file.name" => scalar string(link.source.name),
    "link.file.overlay_numlower" => scalar int(link.source.overlay_numlower),
    "link.file.path" => scalar string(link.source.path),
    "link.file.uid" => scalar int(link.source.uid),
    "link.file.user" => scalar string(link.source.user),
    "link.retval" => scalar int(link.syscall.retval),
    "mkdir.file.container_path" => scalar string(mkdir.file.container_path),
    "mkdir.file.destination.mode" => scalar int(mkdir.mode),
    "mkdir.file.gid" => scalar int(mkdir.file.gid),
    "mkdir.file.group" => scalar string(mkdir.file.group),
    "mkdir.file.inode" => scalar int(mkdir.file.inode),
    "mkdir.file.mode" => scalar int(mkdir.file.mode),
    "mkdir.file.mount_id" => scalar int(mkdir.file.mount_id),
    "mkdir.file.name" => scalar string(mkdir.file.name),
    "mkdir.file.overlay_numlower" => scalar int(mkdir.file.overlay_numlower),
    "mkdir.file.path" => scalar string(mkdir.file.path),
    "mkdir.file.uid" => scalar int(mkdir.file.uid),
    "mkdir.file.user" => scalar string(mkdir.file.user),
    "mkdir.retval" => scalar int(mkdir.syscall.retval),
    "open.file.container_path" => scalar string(open.file.container_path),
    "open.file.destination.mode" => scalar int(open.mode),
    "open.file.gid" => scalar int(open.file.gid),
    "open.file.group" => scalar string(open.file.group),
    "open.file.inode" => scalar int(open.file.inode),
    "open.file.mode" => scalar int(open.file.mode),
    "open.file.mount_id" => scalar int(open.file.mount_id),
    "open.file.name" => scalar string(open.file.name),
    "open.file.overlay_numlower" => scalar int(open.file.overlay_numlower),
    "open.file.path" => scalar string(open.file.path),
    "open.file.uid" => scalar int(open.file.uid),
    "open.file.user" => scalar string(open.file.user),
    "open.flags" => scalar int(open.flags),
    "open.retval" => scalar int(open.syscall.retval),
    "process.ancestors.cap_effective" => ancestors int(process_context.process.credentials.cap_effective),
    "process.ancestors.cap_permitted" => ancestors int(process_context.process.credentials.cap_permitted),
    "process.ancestors.comm" => ancestors string(process_context.process.comm),
    "process.ancestors.cookie" => ancestors int(process_context.process.cookie),
    "process.ancestors.egid" => ancestors int(process_context.process.credentials.egid),
    "process.ancestors.egroup" => ancestors string(process_context.process.credentials.egroup),
    "process.ancestors.euid" => ancestors int(process_context.process.credentials.euid),
    "process.ancestors.euser" => ancestors string(process_context.process.credentials.euser),
    "process.ancestors.file.container_path" => ancestors string(process_context.process.file.container_path),
    "process.ancestors.file.gid" => ancestors int(process_context.process.file.gid),
    "process.ancestors.file.group" => ancestors string(process_context.process.file.group),
    "process.ancestors.file.inode" => ancestors int(process_context.process.file.inode),
    "process.ancestors.file.mode" => ancestors int(process_context.process.file.mode),
    "process.ancestors.file.mount_id" => ancestors int(process_context.process.file.mount_id),
    "process.ancestors.file.name" => ancestors string(process_context.process.file.name),
    "process.ancestors.file.overlay_numlower" => ancestors int(process_context.process.file.overlay_numlower),
    "process.ancestors.file.path" => ancestors string(process_context.process.file.path),
    "process.ancestors.file.uid" => ancestors int(process_context.process.file.uid),
    "process.ancestors.file.user" => ancestors string(process_context.process.file.user),
    "process.ancestors.fsgid" => ancestors int(process_context.process.credentials.fsgid),
    "process.ancestors.fsgroup" => ancestors string(process_context.process.credentials.fsgroup),
    "process.ancestors.fsuid" => ancestors int(process_context.process.credentials.fsuid),
    "process.ancestors.fsuser" => ancestors string(process_context.process.credentials.fsuser),
    "process.ancestors.gid" => ancestors int(process_context.process.credentials.gid),
    "process.ancestors.group" => ancestors string(process_context.process.credentials.group),
    "process.ancestors.id" => ancestors string(container_context.id),
    "process.ancestors.pid" => ancestors int(process_context.pid),
    "process.ancestors.ppid" => ancestors int(process_context.process.ppid),
    "process.ancestors.tid" => ancestors int(process_context.tid),
    "process.ancestors.tty_name" => ancestors string(process_context.process.tty_name),
    "process.ancestors.uid" => ancestors int(process_context.process.credentials.uid),
    "process.ancestors.user" => ancestors string(process_context.process.credentials.user),
    "process.cap_effective" => scalar int(process_context.process.credentials.cap_effective),
    "process.cap_permitted" => scalar int(process_context.process.credentials.cap_permitted),
    "process.comm" => scalar string(process_context.process.comm),
    "process.cookie" => scalar int(process_context.process.cookie),
    "process.egid" => scalar int(process_context.process.credentials.egid),
    "process.egroup" => scalar string(process_context.process.credentials.egroup),
    "process.euid" => scalar int(process_context.process.credentials.euid),
    "process.euser" => scalar string(process_context.process.credentials.euser),
    "process.file.container_path" => scalar string(process_context.process.file.container_path),
    "process.file.gid" => scalar int(process_context.process.file.gid),
    "process.file.group" => scalar string(process_context.process.file.group),
    "process.file.inode" => scalar int(process_context.process.file.inode),
    "process.file.mode" => scalar int(process_context.process.file.mode),
    "process.file.mount_id" => scalar int(process_context.process.file.mount_id),
    "process.file.name" => scalar string(process_context.process.file.name),
    "process.file.overlay_numlower" => scalar int(process_context.process.file.overlay_numlower),
    "process.file.path" => scalar string(process_context.process.file.path),
    "process.file.uid" => scalar int(process_context.process.file.uid),
    "process.file.user" => scalar string(process_context.process.file.user),
    "process.fsgid" => scalar int(process_context.process.credentials.fsgid),
    "process.fsgroup" => scalar string(process_context.process.credentials.fsgroup),
    "process.fsuid" => scalar int(process_context.process.credentials.fsuid),
    "process.fsuser" => scalar string(process_context.process.credentials.fsuser),
    "process.gid" => scalar int(process_context.process.credentials.gid),
    "process.group" => scalar string(process_context.process.credentials.group),
    "process.pid" => scalar int(process_context.pid),
    "process.ppid" => scalar int(process_context.process.ppid),
    "process.tid" => scalar int(process_context.tid),
    "process.tty_name" => scalar string(process_context.process.tty_name),
    "process.uid" => scalar int(process_context.process.credentials.uid),
    "process.user" => scalar string(process_context.process.credentials.user),
    "removexattr.file.container_path" => scalar string(removexattr.file.container_path),
    "removexattr.file.destination.name" => scalar string(removexattr.name),
    "removexattr.file.destination.namespace" => scalar string(removexattr.namespace),
    "removexattr.file.gid" => scalar int(removexattr.file.gid),
    "removexattr.file.group" => scalar string(removexattr.file.group),
    "removexattr.file.inode" => scalar int(removexattr.file.inode),
    "removexattr.file.mode" => scalar int(removexattr.file.mode),
    "removexattr.file.mount_id" => scalar int(removexattr.file.mount_id),
    "removexattr.file.name" => scalar string(removexattr.file.name),
    "removexattr.file.overlay_numlower" => scalar int(removexattr.file.overlay_numlower),
    "removexattr.file.path" => scalar string(removexattr.file.path),
    "removexattr.file.uid" => scalar int(removexattr.file.uid),
    "removexattr.file.user" => scalar string(removexattr.file.user),
    "removexattr.retval" => scalar int(removexattr.syscall.retval),
    "rename.file.container_path" => scalar string(rename.old.container_path),
    "rename.file.destination.container_path" => scalar string(rename.new.container_path),
    "rename.file.destination.gid" => scalar int(rename.new.gid),
    "rename.file.destination.group" => scalar string(rename.new.group),
    "rename.file.destination.inode" => scalar int(rename.new.inode),
    "rename.file.destination.mode" => scalar int(rename.new.mode),
    "rename.file.destination.mount_id" => scalar int(rename.new.mount_id),
    "rename.file.destination.name" => scalar string(rename.new.name),
    "rename.file.destination.overlay_numlower" => scalar int(rename.new.overlay_numlower),
    "rename.file.destination.path" => scalar string(rename.new.path),
    "rename.file.destination.uid" => scalar int(rename.new.uid),
    "rename.file.destination.user" => scalar string(rename.new.user),
    "rename.file.gid" => scalar int(rename.old.gid),
    "rename.file.group" => scalar string(rename.old.group),
    "rename.file.inode" => scalar int(rename.old.inode),
    "rename.file.mode" => scalar int(rename.old.mode),
    "rename.file.mount_id" => scalar int(rename.old.mount_id),
    "rename.file.name" => scalar string(rename.old.name),
    "rename.file.overlay_numlower" => scalar int(rename.old.overlay_numlower),
    "rename.file.path" => scalar string(rename.old.path),
    "rename.file.uid" => scalar int(rename.old.uid),
    "rename.file.user" => scalar string(rename.old.user),
    "rename.retval" => scalar int(rename.syscall.retval),
    "rmdir.file.container_path" => scalar string(rmdir.file.container_path),
    "rmdir.file.gid" => scalar int(rmdir.file.gid),
    "rmdir.file.group" => scalar string(rmdir.file.group),
    "rmdir.file.inode" => scalar int(rmdir.file.inode),
    "rmdir.file.mode" => scalar int(rmdir.file.mode),
    "rmdir.file.mount_id" => scalar int(rmdir.file.mount_id),
    "rmdir.file.name" => scalar string(rmdir.file.name),
    "rmdir.file.overlay_numlower" => scalar int(rmdir.file.overlay_numlower),
    "rmdir.file.path" => scalar string(rmdir.file.path),
    "rmdir.file.uid" => scalar int(rmdir.file.uid),
    "rmdir.file.user" => scalar string(rmdir.file.user),
    "rmdir.retval" => scalar int(rmdir.syscall.retval),
    "setgid.egid" => scalar int(setgid.egid),
    "setgid.egroup" => scalar string(setgid.egroup),
    "setgid.fsgid" => scalar int(setgid.fsgid),
    "setgid.fsgroup" => scalar string(setgid.fsgroup),
    "setgid.gid" => scalar int(setgid.gid),
    "setgid.group" => scalar string(setgid.group),
    "setuid.euid" => scalar int(setuid.euid),
    "setuid.euser" => scalar string(setuid.euser),
    "setuid.fsuid" => scalar int(setuid.fsuid),
    "setuid.fsuser" => scalar string(setuid.fsuser),
    "setuid.uid" => scalar int(setuid.uid),
    "setuid.user" => scalar string(setuid.user),
    "setxattr.file.container_path" => scalar string(setxattr.file.container_path),
    "setxattr.file.destination.name" => scalar string(setxattr.name),
    "setxattr.file.destination.namespace" => scalar string(setxattr.namespace),
    "setxattr.file.gid" => scalar int(setxattr.file.gid),
    "setxattr.file.group" => scalar string(setxattr.file.group),
    "setxattr.file.inode" => scalar int(setxattr.file.inode),
    "setxattr.file.mode" => scalar int(setxattr.file.mode),
    "setxattr.file.mount_id" => scalar int(setxattr.file.mount_id),
    "setxattr.file.name" => scalar string(setxattr.file.name),
    "setxattr.file.overlay_numlower" => scalar int(setxattr.file.overlay_numlower),
    "setxattr.file.path" => scalar string(setxattr.file.path),
    "setxattr.file.uid" => scalar int(setxattr.file.uid),
    "setxattr.file.user" => scalar string(setxattr.file.user),
    "setxattr.retval" => scalar int(setxattr.syscall.retval),
    "unlink.file.container_path" => scalar string(unlink.file.container_path),
    "unlink.file.gid" => scalar int(unlink.file.gid),
    "unlink.file.group" => scalar string(unlink.file.group),
    "unlink.file.inode" => scalar int(unlink.file.inode),
    "unlink.file.mode" => scalar int(unlink.file.mode),
    "unlink.file.mount_id" => scalar int(unlink.file.mount_id),
    "unlink.file.name" => scalar string(unlink.file.name),
    "unlink.file.overlay_numlower" => scalar int(unlink.file.overlay_numlower),
    "unlink.file.path" => scalar string(unlink.file.path),
    "unlink.file.uid" => scalar int(unlink.file.uid),
    "unlink.file.user" => scalar string(unlink.file.user),
    "unlink.retval" => scalar int(unlink.syscall.retval),
    "utimes.file.container_path" => scalar string(utimes.file.container_path),
    "utimes.file.gid" => scalar int(utimes.file.gid),
    "utimes.file.group" => scalar string(utimes.file.group),
    "utimes.file.inode" => scalar int(utimes.file.inode),
    "utimes.file.mode" => scalar int(utimes.file.mode),
    "utimes.file.mount_id" => scalar int(utimes.file.mount_id),
    "utimes.file.name" => scalar string(utimes.file.name),
    "utimes.file.overlay_numlower" => scalar int(utimes.file.overlay_numlower),
    "utimes.file.path" => scalar string(utimes.file.path),
    "utimes.file.uid" => scalar int(utimes.file.uid),
    "utimes.file.user" => scalar string(utimes.file.user),
    "utimes.retval" => scalar int(utimes.syscall.retval),
}

/// Kind of event a field belongs to: the first path segment, or
/// [ANY_EVENT_TYPE] for process and container fields.
pub fn field_event_type(field: &str) -> Result<&'static str> {
    field_type(field)?;

    match field.split_once('.').map_or(field, |(kind, _)| kind) {
        "process" | "container" => Ok(ANY_EVENT_TYPE),
        kind => EventType::from_str(kind)
            .map(<&'static str>::from)
            .map_err(|_| EvalError::FieldNotFound(field.to_string())),
    }
}

impl Accessors for Event {
    type Element<'e> = Element<'e>;

    fn get_fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn get_field_value(&self, field: &str) -> Result<FieldValue> {
        let evaluator = evaluator(field, 0)?;

        let value = match iterator_kind(field)? {
            Some(kind) => evaluator.collect(self, kind.iterator(), 0),
            None => evaluator.value(&Context::new(self)),
        };
        Ok(value)
    }

    fn get_field_event_type(&self, field: &str) -> Result<&'static str> {
        field_event_type(field)
    }

    fn get_field_type(&self, field: &str) -> Result<FieldType> {
        field_type(field)
    }

    fn set_field_value(&mut self, field: &str, value: FieldValue) -> Result<()> {
        set(self, field, value)
    }
}
