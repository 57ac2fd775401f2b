// SPDX-License-Identifier: MPL-2.0 OR LGPL-2.1-or-later

fn main() {
    let pattern = std::env::args().nth(1).unwrap_or_else(|| String::from("*"));

    magickwand::logging::init();

    let (version, _) = magickwand::version();
    println!("{version}");

    match magickwand::query_formats(&pattern) {
        Ok(formats) => {
            for format in formats {
                println!("{format}");
            }
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
