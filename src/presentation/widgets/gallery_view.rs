use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};

use super::component_unit::{ComponentUnit, ComponentView};
use crate::application::gallery::{GalleryHarness, Slot, SlotStatus};
use crate::presentation::theme::Theme;

const PLACEHOLDER_HEIGHT: u16 = 3;

/// Harness whose slots hold terminal component units.
pub type TerminalHarness<C> = GalleryHarness<C, ComponentUnit<C>>;

fn slot_height<C: ComponentView>(slot: &Slot<C, ComponentUnit<C>>) -> u16 {
    slot.unit().map_or(PLACEHOLDER_HEIGHT, ComponentUnit::height)
}

/// Number of whole slots that fit in `height` rows starting at slot `from`.
#[must_use]
pub fn fitting_slots<C: ComponentView>(harness: &TerminalHarness<C>, from: usize, height: u16) -> usize {
    let mut used: u16 = 0;
    let mut count = 0;
    for slot in harness.slots().iter().skip(from) {
        used = used.saturating_add(slot_height(slot));
        if used > height {
            break;
        }
        count += 1;
    }
    count.max(1)
}

/// Scrolls until the focused slot is fully visible in `height` rows.
pub fn reveal_focus<C: ComponentView>(harness: &mut TerminalHarness<C>, height: u16) {
    for _ in 0..harness.len() {
        let before = harness.scroll_offset();
        let visible = fitting_slots(harness, before, height);
        harness.ensure_focus_visible(visible);
        if harness.scroll_offset() == before {
            break;
        }
    }
}

/// Vertical stack of the harness slots with a scrollbar.
pub struct GalleryView<'a, C: ComponentView> {
    harness: &'a TerminalHarness<C>,
    theme: &'a Theme,
}

impl<'a, C: ComponentView> GalleryView<'a, C> {
    /// Creates the widget.
    #[must_use]
    pub fn new(harness: &'a TerminalHarness<C>, theme: &'a Theme) -> Self {
        Self { harness, theme }
    }
}

impl<C: ComponentView> Widget for GalleryView<'_, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 4 {
            return;
        }

        let content = Rect {
            width: area.width - 1,
            ..area
        };
        let focused = self.harness.focused_index();
        let mut y = content.y;

        for (index, slot) in self.harness.slots().iter().enumerate().skip(self.harness.scroll_offset()) {
            if y >= content.bottom() {
                break;
            }
            let height = slot_height(slot).min(content.bottom() - y);
            let slot_area = Rect::new(content.x, y, content.width, height);
            y += height;

            let is_focused = focused == Some(index);
            let (border_style, marker) = if is_focused {
                (self.theme.focus_style, "▶ ")
            } else {
                (self.theme.dimmed_style, "")
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(Line::from(vec![
                    Span::styled(marker, self.theme.focus_style),
                    Span::styled(slot.label(), border_style),
                ]));
            let inner = block.inner(slot_area);
            block.render(slot_area, buf);

            match (slot.status(), slot.unit()) {
                (SlotStatus::Mounted, Some(unit)) => unit.render(inner, buf, self.theme),
                (status, _) => {
                    Paragraph::new(format!("{status:?}"))
                        .style(self.theme.dimmed_style)
                        .render(inner, buf);
                }
            }
        }

        if self.harness.len() > 1 {
            let mut state = ScrollbarState::new(self.harness.len())
                .position(self.harness.focused_index().unwrap_or(0));
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Style::default().fg(self.theme.accent))
                .track_style(self.theme.dimmed_style)
                .render(area, buf, &mut state);
        }
    }
}
