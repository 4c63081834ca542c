//! Array commands (new, show, merge, sort)

use super::{reply_with, Command, CommandContext};
use crate::protocol::Reply;
use crate::store::parse_sequence;
use tracing::debug;

/// new command - Bind a name to a list of integers
///
/// Syntax: new <array_name> [<comma-separated-values>]
///
/// An existing binding is replaced. A malformed value aborts the whole
/// command and leaves the store untouched.
pub struct NewCommand;

impl Command for NewCommand {
    fn execute(&self, ctx: &CommandContext, args: &[&str]) -> Reply {
        let key = args[0];

        let values = match args.get(1) {
            Some(raw) => match parse_sequence(raw) {
                Ok(values) => values,
                Err(e) => {
                    debug!("Rejected values for '{}': {}", key, e);
                    return Reply::error(e);
                }
            },
            None => Vec::new(),
        };

        ctx.store.set(key, values);
        Reply::status("CREATED")
    }

    fn name(&self) -> &'static str {
        "new"
    }

    fn usage(&self) -> &'static str {
        "Usage: new <array_name> [<comma-separated-values>]"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}

/// show command - Print the content of an array
///
/// Syntax: show <array_name>
pub struct ShowCommand;

impl Command for ShowCommand {
    fn execute(&self, ctx: &CommandContext, args: &[&str]) -> Reply {
        reply_with(ctx.store.show(args[0]), Reply::Text)
    }

    fn name(&self) -> &'static str {
        "show"
    }

    fn usage(&self) -> &'static str {
        "Usage: show <array_name>"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

/// merge command - Append the source array to the destination array
///
/// Syntax: merge <dest_array_name> <src_array_name>
pub struct MergeCommand;

impl Command for MergeCommand {
    fn execute(&self, ctx: &CommandContext, args: &[&str]) -> Reply {
        reply_with(ctx.store.merge(args[0], args[1]), |_| Reply::status("MERGED"))
    }

    fn name(&self) -> &'static str {
        "merge"
    }

    fn usage(&self) -> &'static str {
        "Usage: merge <dest_array_name> <src_array_name>"
    }

    fn min_args(&self) -> usize {
        2
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}

/// sort command - Sort an array in non-decreasing order
///
/// Syntax: sort <array_name>
pub struct SortCommand;

impl Command for SortCommand {
    fn execute(&self, ctx: &CommandContext, args: &[&str]) -> Reply {
        reply_with(ctx.store.sort(args[0]), |_| Reply::status("SORTED"))
    }

    fn name(&self) -> &'static str {
        "sort"
    }

    fn usage(&self) -> &'static str {
        "Usage: sort <array_name>"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::sync::Arc;

    fn ctx() -> CommandContext {
        CommandContext::new(Arc::new(Store::new("unused.wkn")))
    }

    #[test]
    fn test_new_and_show_keep_order() {
        let ctx = ctx();

        let result = NewCommand.execute(&ctx, &["foo", "3,1,2"]);
        assert_eq!(result, Reply::status("CREATED"));

        let result = ShowCommand.execute(&ctx, &["foo"]);
        assert_eq!(result, Reply::text("[3 1 2]"));
    }

    #[test]
    fn test_new_without_values() {
        let ctx = ctx();

        NewCommand.execute(&ctx, &["empty"]);
        assert_eq!(ctx.store.get("empty").unwrap(), Vec::<i64>::new());
        assert_eq!(ShowCommand.execute(&ctx, &["empty"]), Reply::text("[]"));
    }

    #[test]
    fn test_new_aborts_on_malformed_value() {
        let ctx = ctx();

        let result = NewCommand.execute(&ctx, &["foo", "1,x,2"]);
        assert!(matches!(result, Reply::Error(ref e) if e.starts_with("invalid value 'x'")));
        assert!(ctx.store.get("foo").is_err());

        // An existing binding survives a rejected replacement
        NewCommand.execute(&ctx, &["foo", "7"]);
        NewCommand.execute(&ctx, &["foo", "1,,2"]);
        assert_eq!(ctx.store.get("foo").unwrap(), vec![7]);
    }

    #[test]
    fn test_new_replaces() {
        let ctx = ctx();

        NewCommand.execute(&ctx, &["foo", "1,2"]);
        NewCommand.execute(&ctx, &["foo", "9"]);
        assert_eq!(ctx.store.get("foo").unwrap(), vec![9]);
    }

    #[test]
    fn test_show_missing() {
        let ctx = ctx();
        let result = ShowCommand.execute(&ctx, &["nope"]);
        assert_eq!(result, Reply::error("array does not exist"));
    }

    #[test]
    fn test_sort() {
        let ctx = ctx();

        NewCommand.execute(&ctx, &["foo", "3,1,2"]);
        assert_eq!(SortCommand.execute(&ctx, &["foo"]), Reply::status("SORTED"));
        assert_eq!(ShowCommand.execute(&ctx, &["foo"]), Reply::text("[1 2 3]"));

        let result = SortCommand.execute(&ctx, &["nope"]);
        assert_eq!(result, Reply::error("array does not exist"));
    }

    #[test]
    fn test_merge() {
        let ctx = ctx();

        NewCommand.execute(&ctx, &["a", "1,2"]);
        NewCommand.execute(&ctx, &["b", "3,4"]);

        assert_eq!(MergeCommand.execute(&ctx, &["a", "b"]), Reply::status("MERGED"));
        assert_eq!(ShowCommand.execute(&ctx, &["a"]), Reply::text("[1 2 3 4]"));
        assert_eq!(ShowCommand.execute(&ctx, &["b"]), Reply::text("[3 4]"));
    }

    #[test]
    fn test_merge_missing_source_leaves_destination() {
        let ctx = ctx();

        NewCommand.execute(&ctx, &["a", "1,2"]);

        let result = MergeCommand.execute(&ctx, &["a", "b"]);
        assert_eq!(result, Reply::error("source array does not exist"));
        assert_eq!(ctx.store.get("a").unwrap(), vec![1, 2]);

        let result = MergeCommand.execute(&ctx, &["z", "a"]);
        assert_eq!(result, Reply::error("destination array does not exist"));
    }
}
