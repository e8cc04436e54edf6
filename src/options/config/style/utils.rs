use concat_string::concat_string;
use tui::style::Color;
use unicode_segmentation::UnicodeSegmentation;

const RGB_HELP: &str =
    "It must be three comma-separated integers from 0 to 255, like '255, 0, 155'.";

/// Parse a `#rgb` or `#rrggbb` hex string.
fn hex_to_colour(hex: &str) -> Result<Color, String> {
    let digits: Vec<&str> = match hex.strip_prefix('#') {
        Some(rest) => rest.graphemes(true).collect(),
        None => Vec::new(),
    };

    let pairs: [(&str, &str); 3] = match digits.as_slice() {
        [r, g, b] => [(*r, *r), (*g, *g), (*b, *b)],
        [r1, r2, g1, g2, b1, b2] => [(*r1, *r2), (*g1, *g2), (*b1, *b2)],
        _ => {
            return Err(format!(
                "'{hex}' is not a hex colour. Use either '#1a2b3c' or the short form '#1a2'."
            ))
        }
    };

    let mut channels = [0u8; 3];
    for (channel, (high, low)) in channels.iter_mut().zip(pairs) {
        *channel = u8::from_str_radix(&concat_string!(high, low), 16)
            .map_err(|_| format!("'{hex}' has digits that aren't hexadecimal."))?;
    }

    let [r, g, b] = channels;
    Ok(Color::Rgb(r, g, b))
}

/// Parse an `r, g, b` triple.
fn rgb_to_colour(rgb: &str) -> Result<Color, String> {
    let parts: Vec<&str> = rgb.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("'{rgb}' is not an RGB colour. {RGB_HELP}"));
    }

    let channels = parts
        .iter()
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("'{rgb}' has an out of range RGB value. {RGB_HELP}"))?;

    Ok(Color::Rgb(channels[0], channels[1], channels[2]))
}

fn name_to_colour(name: &str) -> Result<Color, String> {
    let normalized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace("grey", "gray");

    let colour = match normalized.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => {
            return Err(format!(
                "'{name}' is not a known colour name. Supported names are Reset, Black, Red, \
                Green, Yellow, Blue, Magenta, Cyan, Gray, Dark Gray, Light Red, Light Green, \
                Light Yellow, Light Blue, Light Magenta, Light Cyan and White. Hex and RGB \
                colours also work."
            ))
        }
    };

    Ok(colour)
}

/// Parse a colour from a config value: a hex string, an RGB triple, or a name.
pub(crate) fn str_to_colour(value: &str) -> Result<Color, String> {
    let value = value.trim();

    if value.starts_with('#') {
        hex_to_colour(value)
    } else if value.contains(',') {
        rgb_to_colour(value)
    } else if value.is_empty() {
        Err("An empty string is not a colour.".to_string())
    } else {
        name_to_colour(value)
    }
}

/// Overwrite `$target` with the colour at `$config.$field`, if one is set.
macro_rules! set_colour {
    ($target:expr, $config:expr, $field:ident) => {
        if let Some(colour) = $config.as_ref().and_then(|c| c.$field.as_deref()) {
            $target = $target.fg(
                crate::options::config::style::utils::str_to_colour(colour).map_err(|err| {
                    crate::options::OptionError::config(format!(
                        "Please update 'colors.{}' in your config file. {err}",
                        stringify!($field)
                    ))
                })?,
            );
        }
    };
}

pub(super) use set_colour;
