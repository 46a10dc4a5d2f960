// Scrollable read-only output state.
// - Stores the rendered lines of the latest panel or analysis output.
// - Implements shared scrolling and paging clamped to the last viewport.
// - Any tab can own one and hand it to the shared output panel renderer.
use std::cell::Cell;

#[derive(Debug, Clone)]
pub struct OutputView {
    lines: Vec<String>,
    scroll: Cell<usize>,
    last_max_scroll_top: Cell<usize>,
}

impl OutputView {
    const PAGE_STEP: usize = 12;
    const MAX_LINES: usize = 20_000;

    pub(crate) fn empty() -> Self {
        Self {
            lines: Vec::new(),
            scroll: Cell::new(0),
            last_max_scroll_top: Cell::new(0),
        }
    }

    pub(crate) fn show(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
        if self.lines.is_empty() {
            // Keep one row so an empty result still reads as "ran".
            self.lines.push(String::new());
        }
        self.truncate_to_max_lines();
        self.scroll.set(0);
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
        self.scroll.set(0);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn scroll_down(&mut self) {
        let max_scroll = self.last_max_scroll_top.get();
        self.scroll.set((self.scroll.get() + 1).min(max_scroll));
    }

    pub(crate) fn scroll_up(&mut self) {
        self.scroll.set(self.scroll.get().saturating_sub(1));
    }

    pub(crate) fn page_down(&mut self) {
        let max_scroll = self.last_max_scroll_top.get();
        self.scroll
            .set((self.scroll.get() + Self::PAGE_STEP).min(max_scroll));
    }

    pub(crate) fn page_up(&mut self) {
        self.scroll
            .set(self.scroll.get().saturating_sub(Self::PAGE_STEP));
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn scroll(&self) -> usize {
        self.scroll.get()
    }

    pub(crate) fn clamped_scroll_for_viewport(&self, visible_line_count: usize) -> usize {
        let visible_line_count = visible_line_count.max(1);
        let max_scroll_top = self.lines.len().saturating_sub(visible_line_count);
        self.last_max_scroll_top.set(max_scroll_top);
        let clamped = self.scroll().min(max_scroll_top);
        self.scroll.set(clamped);
        clamped
    }

    // Keeps the head of oversized output and marks the cut on the last row.
    fn truncate_to_max_lines(&mut self) {
        if self.lines.len() <= Self::MAX_LINES {
            return;
        }
        let hidden = self.lines.len() - (Self::MAX_LINES - 1);
        self.lines.truncate(Self::MAX_LINES - 1);
        self.lines
            .push(format!("... output truncated, {hidden} more lines not shown"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_splits_lines_and_resets_scroll() {
        let mut view = OutputView::empty();
        view.show("a\nb\nc");
        view.clamped_scroll_for_viewport(1);
        view.scroll_down();
        assert_eq!(view.scroll(), 1);

        view.show("x\ny");
        assert_eq!(view.lines(), ["x", "y"]);
        assert_eq!(view.scroll(), 0);
    }

    #[test]
    fn empty_text_still_shows_a_row() {
        let mut view = OutputView::empty();
        assert!(view.is_empty());
        view.show("");
        assert!(!view.is_empty());
        assert_eq!(view.lines().len(), 1);
    }

    #[test]
    fn scrolling_is_clamped_to_viewport() {
        let mut view = OutputView::empty();
        let text = (0..30).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        view.show(&text);
        assert_eq!(view.clamped_scroll_for_viewport(10), 0);

        view.page_down();
        view.page_down();
        assert_eq!(view.scroll(), 20);
        view.scroll_down();
        assert_eq!(view.scroll(), 20);

        view.page_up();
        view.scroll_up();
        assert_eq!(view.scroll(), 7);
    }

    #[test]
    fn oversized_output_keeps_head_and_marks_truncation() {
        let mut view = OutputView::empty();
        let text = (0..OutputView::MAX_LINES + 5)
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        view.show(&text);

        let lines = view.lines();
        assert_eq!(lines.len(), OutputView::MAX_LINES);
        assert_eq!(lines[0], "0");
        assert_eq!(lines[OutputView::MAX_LINES - 2], "19998");
        assert_eq!(
            lines[OutputView::MAX_LINES - 1],
            "... output truncated, 6 more lines not shown"
        );
    }

    #[test]
    fn clear_empties_lines() {
        let mut view = OutputView::empty();
        view.show("report");
        view.clear();
        assert!(view.is_empty());
        assert_eq!(view.scroll(), 0);
    }
}
