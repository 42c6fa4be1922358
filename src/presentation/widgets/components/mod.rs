//! [`ComponentView`](super::ComponentView) implementations for every mock configuration.

mod button;
mod capsule;
mod code_clipboard;
mod progress_check;
mod tab_bar;
mod wallet;

#[cfg(test)]
pub(crate) fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    let area = buf.area;
    (area.left()..area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}
