//! Regex-mode enumeration: a pipelined stage per [`RegexNode`].
//!
//! Each node is compiled into a stage that consumes a bounded stream of
//! *prefixes* (strings already built by earlier stages) and emits a bounded
//! stream of extended prefixes. Stages run concurrently, one OS thread per
//! stage instance, and communicate only through bounded [`Pipe`]s — no
//! stage ever holds the whole language a node describes in memory at once.
//!
//! - `Literal` / `CharClass`: for each incoming prefix, emit one or more
//!   extended prefixes.
//! - `Anchor`: pass-through.
//! - `Concat`: children chained in order — child `k`'s output stream is
//!   child `k+1`'s input stream.
//! - `Alternate`: because a stream is single-consumer, incoming prefixes
//!   are buffered once into a list, then each branch gets its own feeder
//!   stream carrying that list; branches run concurrently and their
//!   outputs are merged.
//! - `Repeat`: a recursive unfolding of up to `max` applications of the
//!   sub-expression. Each level fans its input out to two streams: a
//!   pass-through (once the repeat count has reached `min`) and a loop-back
//!   through `sub` to produce the next level's prefixes.

use crate::pipe::{spawn, Pipe, PipeReceiver, PipeSender, TaskHandle};
use pwgen_spec::RegexNode;

/// Bound on intermediate per-stage channel capacity. Keeps memory
/// proportional to pipeline depth and fan-out rather than to the size of
/// the language a node describes.
const STAGE_CAPACITY: usize = 100;

/// Spawns a single-value stream carrying the empty prefix, the seed every
/// top-level enumeration starts from.
fn seed_stream(capacity: usize) -> PipeReceiver<String> {
    let (tx, rx) = Pipe::<String>::new(capacity.max(1));
    tx.send(String::new()).ok();
    rx
}

/// Compiles `node` into a stage reading from `input` and returns its
/// output stream. Every thread spawned, directly or by a child stage, is
/// pushed onto `handles` so the caller can join the whole subtree.
fn spawn_stage(
    node: &RegexNode,
    input: PipeReceiver<String>,
    capacity: usize,
    handles: &mut Vec<TaskHandle<()>>,
) -> PipeReceiver<String> {
    match node {
        RegexNode::Anchor => input,
        RegexNode::Literal(chars) => {
            let suffix: String = chars.iter().collect();
            let (tx, rx) = Pipe::<String>::new(capacity);
            handles.push(spawn(move || {
                for prefix in input.iter() {
                    if tx.send(format!("{prefix}{suffix}")).is_err() {
                        return;
                    }
                }
            }));
            rx
        }
        RegexNode::CharClass(ranges) => {
            let ranges = ranges.clone();
            let (tx, rx) = Pipe::<String>::new(capacity);
            handles.push(spawn(move || {
                for prefix in input.iter() {
                    for range in &ranges {
                        let mut c = range.lo;
                        loop {
                            if tx.send(format!("{prefix}{c}")).is_err() {
                                return;
                            }
                            if c == range.hi {
                                break;
                            }
                            c = char::from_u32(c as u32 + 1).expect("range stays in valid char space");
                        }
                    }
                }
            }));
            rx
        }
        RegexNode::Concat(children) => {
            let mut stream = input;
            for child in children {
                stream = spawn_stage(child, stream, capacity, handles);
            }
            stream
        }
        RegexNode::Alternate(children) => spawn_alternate_stage(children, input, capacity, handles),
        RegexNode::Repeat { sub, min, max } => {
            spawn_repeat_stage(sub, *min, *max, input, capacity, handles)
        }
    }
}

/// Buffers the incoming prefixes once, then runs every branch concurrently
/// against its own copy and merges their outputs.
fn spawn_alternate_stage(
    children: &[RegexNode],
    input: PipeReceiver<String>,
    capacity: usize,
    handles: &mut Vec<TaskHandle<()>>,
) -> PipeReceiver<String> {
    let prefixes: Vec<String> = input.iter().collect();
    let (out_tx, out_rx) = Pipe::<String>::new(capacity);
    for child in children {
        let (feed_tx, feed_rx) = Pipe::<String>::new(capacity);
        let branch_prefixes = prefixes.clone();
        handles.push(spawn(move || {
            for p in branch_prefixes {
                if feed_tx.send(p).is_err() {
                    return;
                }
            }
        }));
        let child_out = spawn_stage(child, feed_rx, capacity, handles);
        let out_tx = out_tx.clone();
        handles.push(spawn(move || {
            for v in child_out.iter() {
                if out_tx.send(v).is_err() {
                    return;
                }
            }
        }));
    }
    out_rx
}

/// Unfolds `sub` level by level. At level `n`, prefixes are forwarded to
/// the output once `n >= min`, and looped back through `sub` to build
/// level `n + 1` as long as `n < max`.
fn spawn_repeat_stage(
    sub: &RegexNode,
    min: usize,
    max: usize,
    input: PipeReceiver<String>,
    capacity: usize,
    handles: &mut Vec<TaskHandle<()>>,
) -> PipeReceiver<String> {
    let (out_tx, out_rx) = Pipe::<String>::new(capacity);
    let mut level_stream = input;
    for n in 0..=max {
        let want_pass = n >= min;
        let want_loop = n < max;

        let pass_chan = want_pass.then(|| Pipe::<String>::new(capacity));
        let loop_chan = want_loop.then(|| Pipe::<String>::new(capacity));
        let pass_tx: Option<PipeSender<String>> = pass_chan.as_ref().map(|(tx, _)| tx.clone());
        let loop_tx: Option<PipeSender<String>> = loop_chan.as_ref().map(|(tx, _)| tx.clone());

        handles.push(spawn(move || {
            for p in level_stream.iter() {
                if let Some(tx) = &loop_tx {
                    tx.send(p.clone()).ok();
                }
                if let Some(tx) = &pass_tx {
                    tx.send(p).ok();
                }
            }
        }));

        if let Some((_, pass_rx)) = pass_chan {
            let out_tx = out_tx.clone();
            handles.push(spawn(move || {
                for v in pass_rx.iter() {
                    if out_tx.send(v).is_err() {
                        return;
                    }
                }
            }));
        }

        match loop_chan {
            Some((_, loop_rx)) => level_stream = spawn_stage(sub, loop_rx, capacity, handles),
            None => break,
        }
    }
    out_rx
}

/// Spawns the full regex-mode pipeline for `node`, returning a handle that
/// joins every stage thread and a receiver streaming the final candidates.
pub fn spawn_regex_enum(node: RegexNode, capacity: usize) -> (TaskHandle<()>, PipeReceiver<String>) {
    let (out_tx, out_rx) = Pipe::<String>::new(capacity);
    let handle = spawn(move || {
        let mut handles = Vec::new();
        let seed = seed_stream(STAGE_CAPACITY);
        let final_stream = spawn_stage(&node, seed, STAGE_CAPACITY, &mut handles);
        for candidate in final_stream.iter() {
            if out_tx.send(candidate).is_err() {
                break;
            }
        }
        for h in handles {
            h.join().expect("regex stage panicked");
        }
    });
    (handle, out_rx)
}

/// Runs the full pipeline for `node` synchronously and collects every
/// candidate. Test-only convenience; production callers use
/// [`spawn_regex_enum`] to stream results instead of materializing them.
#[cfg(test)]
fn expand(node: &RegexNode) -> Vec<String> {
    let (handle, rx) = spawn_regex_enum(node.clone(), 4096);
    let values = rx.iter().collect();
    handle.join().unwrap();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwgen_spec::regex;
    use std::collections::HashSet;

    #[test]
    fn literal_expands_to_itself() {
        let node = regex::parse("ab").unwrap();
        assert_eq!(expand(&node), vec!["ab".to_string()]);
    }

    #[test]
    fn char_class_expands_to_each_member() {
        let node = regex::parse("[a-c]").unwrap();
        let values: HashSet<String> = expand(&node).into_iter().collect();
        assert_eq!(values, HashSet::from(["a".into(), "b".into(), "c".into()]));
    }

    #[test]
    fn concat_cross_joins_children() {
        let node = regex::parse("[ab][01]").unwrap();
        let values: HashSet<String> = expand(&node).into_iter().collect();
        assert_eq!(
            values,
            HashSet::from(["a0".into(), "a1".into(), "b0".into(), "b1".into()])
        );
    }

    #[test]
    fn alternate_unions_branches() {
        let node = regex::parse("ab|cd").unwrap();
        let values: HashSet<String> = expand(&node).into_iter().collect();
        assert_eq!(values, HashSet::from(["ab".into(), "cd".into()]));
    }

    #[test]
    fn bounded_repeat_unfolds_each_count() {
        let node = regex::parse("a{1,2}").unwrap();
        let values: HashSet<String> = expand(&node).into_iter().collect();
        assert_eq!(values, HashSet::from(["a".into(), "aa".into()]));
    }

    #[test]
    fn optional_includes_empty_string() {
        let node = regex::parse("a?").unwrap();
        let values: HashSet<String> = expand(&node).into_iter().collect();
        assert_eq!(values, HashSet::from(["".into(), "a".into()]));
    }

    #[test]
    fn anchors_contribute_nothing_to_output() {
        let node = regex::parse("^a$").unwrap();
        assert_eq!(expand(&node), vec!["a".to_string()]);
    }

    #[test]
    fn spawn_regex_enum_streams_every_candidate() {
        let node = regex::parse("[ab]c").unwrap();
        let (handle, rx) = spawn_regex_enum(node, 8);
        let values: HashSet<String> = rx.iter().collect();
        handle.join().unwrap();
        assert_eq!(values, HashSet::from(["ac".into(), "bc".into()]));
    }
}
