use crate::solvers::IterationRecord;

/// Cursor over a completed search trace for step-by-step scrubbing.
/// The trace itself never changes after construction; only the cursor
/// moves, and it clamps at both ends.
pub struct Playback {
    trace: Vec<IterationRecord>,
    index: usize,
    playing: bool,
}

impl Playback {
    pub fn new(trace: Vec<IterationRecord>) -> Self {
        Self {
            trace,
            index: 0,
            playing: false,
        }
    }

    pub fn current(&self) -> Option<&IterationRecord> {
        self.trace.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn next(&mut self) {
        if self.trace.is_empty() || self.index >= self.trace.len() - 1 {
            return;
        }

        self.index += 1;
    }

    pub fn prev(&mut self) {
        if self.index == 0 {
            return;
        }

        self.index -= 1;
    }

    pub fn seek(&mut self, index: usize) {
        if self.trace.is_empty() {
            return;
        }

        self.index = index.min(self.trace.len() - 1);
    }

    pub fn rewind(&mut self) {
        self.index = 0;
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod test_playback {
    use super::*;
    use crate::grid::Cell;

    fn record(x: i32) -> IterationRecord {
        IterationRecord {
            current: Cell::new(x, 0),
            path: vec![Cell::new(x, 0)],
            neighbors: Default::default(),
        }
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut playback = Playback::new(vec![record(0), record(1), record(2)]);

        playback.prev();
        assert_eq!(playback.index(), 0);

        playback.next();
        playback.next();
        playback.next();
        playback.next();
        assert_eq!(playback.index(), 2);
        assert_eq!(playback.current().unwrap().current, Cell::new(2, 0));

        playback.rewind();
        assert_eq!(playback.index(), 0);
    }

    #[test]
    fn seek_clamps_and_empty_trace_is_inert() {
        let mut playback = Playback::new(vec![record(0), record(1)]);
        playback.seek(100);
        assert_eq!(playback.index(), 1);

        let mut empty = Playback::new(Vec::new());
        empty.next();
        empty.seek(3);
        assert!(empty.current().is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn play_pause_flag() {
        let mut playback = Playback::new(vec![record(0)]);
        assert!(!playback.is_playing());

        playback.play();
        assert!(playback.is_playing());

        playback.pause();
        assert!(!playback.is_playing());
    }
}
