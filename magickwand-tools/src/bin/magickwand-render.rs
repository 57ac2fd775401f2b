// SPDX-License-Identifier: MPL-2.0 OR LGPL-2.1-or-later

use magickwand::MagickWand;

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        std::process::exit(2)
    };
    let output = args.next().unwrap_or_else(|| String::from("output.png"));

    magickwand::logging::init();

    if let Err(err) = render(&path, &output) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn render(path: &str, output: &str) -> magickwand::Result<()> {
    let mut wand = MagickWand::new()?;
    wand.read_image(path)?;
    tracing::debug!(
        "Loaded {} image(s) of format {}",
        wand.number_images(),
        wand.image_format()?
    );

    wand.auto_level_image()?;
    wand.write_image(output)?;

    Ok(())
}
