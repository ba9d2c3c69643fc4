//! Acceptance of single-dash long flags (`-db wallet.db`, `-version=7`).

use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash.
const LONG_FLAGS: &[&str] = &["db", "version", "dry-run", "config", "log-level"];

/// Rewrite `-flag` / `-flag=value` for the known long flags into the
/// `--flag` form clap expects. The program name and everything after a bare
/// `--` are passed through untouched.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if arg == "--" {
            out.push(arg);
            out.extend(args.by_ref());
            break;
        }
        out.push(rewrite(arg));
    }

    out
}

fn rewrite(arg: OsString) -> OsString {
    if arg.to_str().is_some_and(is_single_dash_long_flag) {
        let mut rewritten = OsString::from("-");
        rewritten.push(&arg);
        rewritten
    } else {
        arg
    }
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
