//! Without-repetition counts-mode enumeration.
//!
//! Two pipelined stages: a combination stage picks, for each
//! `(char-set, count)` pair, which distinct characters from that set will
//! appear in the output, then a permutation stage arranges the full
//! multiset of chosen characters into every distinct ordering. Because no
//! character repeats, "distinct ordering" is just "every permutation".

use crate::pipe::{spawn, Pipe, PipeReceiver, PipeSender, TaskHandle};
use pwgen_spec::CountsSpec;
use std::sync::Arc;

/// Depth-first walk choosing `count` distinct characters from each set in
/// turn, emitting the chosen character vector (not yet permuted) for every
/// combination across every set.
fn combinations(spec: &CountsSpec, out: &PipeSender<Vec<char>>) {
    fn walk(
        spec: &CountsSpec,
        set_idx: usize,
        chosen: &mut Vec<char>,
        start_idx: &mut Vec<usize>,
        out: &PipeSender<Vec<char>>,
    ) {
        if set_idx == spec.specs.len() {
            out.send(chosen.clone()).ok();
            return;
        }
        let char_spec = &spec.specs[set_idx];
        let chars = char_spec.char_set.chars();
        let k = char_spec.required_count;
        let base = start_idx[set_idx];
        choose(chars, base, k, &mut Vec::new(), &mut |combo| {
            chosen.extend_from_slice(combo);
            walk(spec, set_idx + 1, chosen, start_idx, out);
            chosen.truncate(chosen.len() - combo.len());
        });
    }

    fn choose(chars: &[char], start: usize, k: usize, acc: &mut Vec<char>, emit: &mut dyn FnMut(&[char])) {
        if acc.len() == k {
            emit(acc);
            return;
        }
        for i in start..chars.len() {
            acc.push(chars[i]);
            choose(chars, i + 1, k, acc, emit);
            acc.pop();
        }
    }

    let mut start_idx = vec![0; spec.specs.len()];
    walk(spec, 0, &mut Vec::new(), &mut start_idx, out);
}

/// Spawns the combination stage, returning a receiver of chosen-character
/// multisets, one per combination across every set in the spec.
pub fn spawn_combinations(spec: Arc<CountsSpec>, capacity: usize) -> (TaskHandle<()>, crate::pipe::PipeReceiver<Vec<char>>) {
    let (tx, rx) = Pipe::<Vec<char>>::new(capacity);
    let handle = spawn(move || {
        combinations(&spec, &tx);
    });
    (handle, rx)
}

/// Emits every distinct permutation of `chars` into `out`.
///
/// Uses Heap's algorithm's simpler cousin — swap-and-recurse — since
/// without-repetition combinations never contain duplicate characters, so
/// every swap produces a genuinely new ordering.
pub fn permute(chars: &mut Vec<char>, out: &PipeSender<String>) {
    fn recurse(chars: &mut Vec<char>, k: usize, out: &PipeSender<String>) {
        if k == 1 {
            out.send(chars.iter().collect()).ok();
            return;
        }
        for i in 0..k {
            chars.swap(i, k - 1);
            recurse(chars, k - 1, out);
            chars.swap(i, k - 1);
        }
    }
    let n = chars.len();
    if n == 0 {
        out.send(String::new()).ok();
        return;
    }
    recurse(chars, n, out);
}

/// Spawns a permutation worker pool of `worker_count` threads, each pulling
/// chosen-character multisets from `combos_rx` and feeding their full
/// permutation sets into a shared `out` sender. Returns handles to join.
///
/// `worker_count` is `--perm-concurrency`'s one consumer: it bounds how
/// many combinations are being permuted at once, the parallel counterpart
/// to `MAX_CONCURRENT_PERMUTATIONS`.
pub fn spawn_permutation_workers(
    combos_rx: PipeReceiver<Vec<char>>,
    out: PipeSender<String>,
    worker_count: usize,
) -> Vec<TaskHandle<()>> {
    (0..worker_count.max(1))
        .map(|_| {
            let combos_rx = combos_rx.clone();
            let out = out.clone();
            spawn(move || {
                for mut chars in combos_rx.iter() {
                    permute(&mut chars, &out);
                }
            })
        })
        .collect()
}
