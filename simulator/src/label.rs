//! Date label text, drawn with ProFont centred in the label bounds.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use modernesque::DateLabelView;
use profont::PROFONT_14_POINT;

const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Draw the label if it is visible. Hidden labels draw nothing; the scene
/// repaint has already covered the background underneath.
pub fn draw_date_label<D>(
    display: &mut D,
    label: &DateLabelView,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if !label.visible || label.text.is_empty() {
        return Ok(());
    }
    let style = MonoTextStyle::new(&PROFONT_14_POINT, label.color);
    Text::with_text_style(&label.text, label.bounds.center(), style, CENTERED).draw(display)?;
    Ok(())
}
