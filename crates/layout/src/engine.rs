//! Pagination & layout engine

use crate::wrap::{wrap_text, Line};
use crate::{Block, LayoutConfig, Page, TextDrawOp};
use pdf_core::{Align, Color, TextMeasure};

/// Explicit layout state threaded through every block
///
/// The cursor is the baseline of the next line in PDF user space. It only
/// decreases within a page and resets to [`LayoutConfig::top`] on a break.
#[derive(Debug, Clone)]
pub struct LayoutState {
    config: LayoutConfig,
    cursor_y: f64,
    current_page: Page,
    completed_pages: Vec<Page>,
}

impl LayoutState {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            cursor_y: config.top(),
            current_page: Page::new(config.page_width, config.page_height),
            completed_pages: Vec::new(),
        }
    }

    pub fn cursor_y(&self) -> f64 {
        self.cursor_y
    }

    pub fn current_page(&self) -> &Page {
        &self.current_page
    }

    pub fn completed_pages(&self) -> &[Page] {
        &self.completed_pages
    }

    /// Pages started so far, including the current one
    pub fn page_count(&self) -> usize {
        self.completed_pages.len() + 1
    }

    /// Wrap a block against the content width and place it
    ///
    /// Spacers move the cursor instead of drawing.
    pub fn push_block<M: TextMeasure + ?Sized>(&mut self, block: &Block, measure: &M) {
        if block.is_spacer() {
            self.advance(block.spacing);
            return;
        }

        let lines = wrap_text(
            &block.text,
            measure,
            block.style.weight,
            block.style.font_size,
            self.config.content_width(),
        );
        self.place(block, &lines);
    }

    /// Place already-wrapped lines of `block`
    ///
    /// The page-break check runs once for the block's whole extent, so its
    /// lines are never split across pages.
    pub fn place(&mut self, block: &Block, lines: &[Line]) {
        if lines.is_empty() {
            return;
        }

        let line_height = block.style.line_height(self.config.line_height_factor);
        let extent = lines.len() as f64 * line_height;

        if self.cursor_y - extent < self.config.margin {
            self.break_page();
            if self.cursor_y - extent < self.config.margin {
                log::warn!(
                    "{:?} block of {} lines ({extent:.1}pt) is taller than the printable area; \
                     drawing past the bottom margin on page {}",
                    block.kind,
                    lines.len(),
                    self.page_count()
                );
            }
        }

        for line in lines {
            let x = match block.style.align {
                Align::Left => self.config.margin,
                Align::Center => (self.config.page_width - line.width) / 2.0,
                Align::Right => self.config.page_width - self.config.margin - line.width,
            };
            self.current_page.operations.push(TextDrawOp {
                x,
                y: self.cursor_y,
                text: line.text.clone(),
                weight: block.style.weight,
                size: block.style.font_size,
                color: Color::black(),
            });
            self.cursor_y -= line_height;
        }
    }

    /// Move the cursor down by `gap` points
    ///
    /// When the gap would cross the bottom margin a new page starts instead
    /// and the gap is not carried over.
    pub fn advance(&mut self, gap: f64) {
        if self.cursor_y - gap < self.config.margin {
            self.break_page();
        } else {
            self.cursor_y -= gap;
        }
    }

    fn break_page(&mut self) {
        let page = std::mem::replace(
            &mut self.current_page,
            Page::new(self.config.page_width, self.config.page_height),
        );
        self.completed_pages.push(page);
        self.cursor_y = self.config.top();
        log::debug!("page break: starting page {}", self.page_count());
    }

    /// Close the current page and return every page in order
    pub fn finish(mut self) -> Vec<Page> {
        self.completed_pages.push(self.current_page);
        self.completed_pages
    }
}

/// Lay out `blocks` in order, returning at least one page
///
/// # Example
/// ```ignore
/// let pages = layout(&blocks, &TimesFamily, &LayoutConfig::letter());
/// for op in &pages[0].operations {
///     println!("{:.1},{:.1} {}", op.x, op.y, op.text);
/// }
/// ```
pub fn layout<M: TextMeasure + ?Sized>(
    blocks: &[Block],
    measure: &M,
    config: &LayoutConfig,
) -> Vec<Page> {
    let state = blocks
        .iter()
        .fold(LayoutState::new(*config), |mut state, block| {
            state.push_block(block, measure);
            state
        });
    state.finish()
}
