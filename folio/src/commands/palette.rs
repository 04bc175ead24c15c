use folio_core::palette::PaletteGenerator;
use std::io::Write;

pub fn palette(count: usize, buffer: &mut impl Write) -> anyhow::Result<()> {
    for color in PaletteGenerator::colors(count)? {
        writeln!(buffer, "{color}")?;
    }
    Ok(())
}
