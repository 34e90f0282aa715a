//! With-repetition counts-mode enumeration.
//!
//! Two pipelined stages: a template stage decides, for each position in
//! the output string, which `(char-set, count)` group owns that position
//! (every distinct assignment of positions to groups is a "template");
//! a fill worker pool then expands each template into every string that
//! can fill it, choosing independently — with repetition — from each
//! position's owning group.

use crate::pipe::{spawn, Pipe, PipeReceiver, PipeSender, TaskHandle};
use pwgen_spec::CountsSpec;
use std::sync::Arc;

/// A template is one assignment of group indices to output positions,
/// e.g. `[0, 1, 0]` means positions 0 and 2 are filled from group 0 and
/// position 1 from group 1.
pub type Template = Vec<usize>;

fn templates(spec: &CountsSpec, out: &PipeSender<Template>) {
    let total = spec.total_length;
    let mut slots: Template = vec![usize::MAX; total];
    let available: Vec<usize> = (0..total).collect();
    assign_group(spec, 0, &available, &mut slots, out);
}

fn assign_group(
    spec: &CountsSpec,
    group_idx: usize,
    available: &[usize],
    slots: &mut Template,
    out: &PipeSender<Template>,
) {
    if group_idx == spec.specs.len() {
        out.send(slots.clone()).ok();
        return;
    }
    let count = spec.specs[group_idx].required_count;
    choose_positions(available, count, &mut Vec::new(), &mut |chosen| {
        for &pos in chosen {
            slots[pos] = group_idx;
        }
        let remaining: Vec<usize> = available
            .iter()
            .copied()
            .filter(|p| !chosen.contains(p))
            .collect();
        assign_group(spec, group_idx + 1, &remaining, slots, out);
    });
}

fn choose_positions(
    available: &[usize],
    k: usize,
    acc: &mut Vec<usize>,
    emit: &mut dyn FnMut(&[usize]),
) {
    if acc.len() == k {
        emit(acc);
        return;
    }
    for i in 0..available.len() {
        if acc.contains(&available[i]) {
            continue;
        }
        if let Some(&last) = acc.last() {
            if available[i] <= last {
                continue;
            }
        }
        acc.push(available[i]);
        choose_positions(available, k, acc, emit);
        acc.pop();
    }
}

/// Spawns the template stage.
pub fn spawn_templates(spec: Arc<CountsSpec>, capacity: usize) -> (TaskHandle<()>, PipeReceiver<Template>) {
    let (tx, rx) = Pipe::<Template>::new(capacity);
    let handle = spawn(move || templates(&spec, &tx));
    (handle, rx)
}

/// Expands a single template into every fill, sending each completed
/// candidate string into `out`.
fn fill_template(spec: &CountsSpec, template: &Template, out: &PipeSender<String>) {
    let mut buf = vec![' '; template.len()];
    fill_position(spec, template, 0, &mut buf, out);
}

fn fill_position(
    spec: &CountsSpec,
    template: &Template,
    pos: usize,
    buf: &mut Vec<char>,
    out: &PipeSender<String>,
) {
    if pos == template.len() {
        out.send(buf.iter().collect()).ok();
        return;
    }
    let group = template[pos];
    for &c in spec.specs[group].char_set.chars() {
        buf[pos] = c;
        fill_position(spec, template, pos + 1, buf, out);
    }
}

/// Spawns a fill worker pool of `worker_count` threads, each pulling
/// templates from `templates_rx` and feeding completed candidates into a
/// shared `out` sender. Returns handles to join.
pub fn spawn_fill_workers(
    spec: Arc<CountsSpec>,
    templates_rx: PipeReceiver<Template>,
    out: PipeSender<String>,
    worker_count: usize,
) -> Vec<TaskHandle<()>> {
    (0..worker_count.max(1))
        .map(|_| {
            let spec = Arc::clone(&spec);
            let templates_rx = templates_rx.clone();
            let out = out.clone();
            spawn(move || {
                for template in templates_rx.iter() {
                    fill_template(&spec, &template, &out);
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwgen_spec::DEFAULT_MAX_TOTAL_LENGTH;
    use std::collections::HashSet;

    #[test]
    fn templates_count_matches_multinomial_positions() {
        let spec = Arc::new(CountsSpec::parse("ab:2,0:1", true, DEFAULT_MAX_TOTAL_LENGTH).unwrap());
        let (handle, rx) = spawn_templates(spec, 64);
        let templates: Vec<Template> = rx.iter().collect();
        handle.join().unwrap();
        // 3! / 2! = 3 distinct position assignments
        assert_eq!(templates.len(), 3);
    }

    #[test]
    fn fills_cover_every_combination_with_repetition() {
        let spec = Arc::new(CountsSpec::parse("ab:2", true, DEFAULT_MAX_TOTAL_LENGTH).unwrap());
        let (t_handle, t_rx) = spawn_templates(Arc::clone(&spec), 16);
        let (out_tx, out_rx) = Pipe::<String>::new(64);
        let fill_handles = spawn_fill_workers(spec, t_rx, out_tx, 2);
        t_handle.join().unwrap();
        for h in fill_handles {
            h.join().unwrap();
        }
        let results: HashSet<String> = out_rx.iter().collect();
        assert_eq!(results, HashSet::from(["aa".into(), "ab".into(), "ba".into(), "bb".into()]));
    }
}
