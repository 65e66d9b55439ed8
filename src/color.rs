use std::fmt::Display;
use std::str::FromStr;

use image::Rgb;

use crate::error::Error;

const RED_MINIMUM: u8 = 120;
const GREEN_MINIMUM: u8 = 95;
const BLUE_MINIMUM: u8 = 95;
/// minimum lead of the selected channel over the opposing one
const CHANNEL_MARGIN: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGBColorFormat<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T> RGBColorFormat<T> {
    pub const fn new(red: T, green: T, blue: T) -> Self {
        RGBColorFormat { red, green, blue }
    }
}

impl RGBColorFormat<u8> {
    pub const BLACK: Self = RGBColorFormat::new(0, 0, 0);
    pub const WHITE: Self = RGBColorFormat::new(255, 255, 255);
}

impl From<Rgb<u8>> for RGBColorFormat<u8> {
    fn from(value: Rgb<u8>) -> Self {
        let [red, green, blue] = value.0;
        RGBColorFormat { red, green, blue }
    }
}

impl From<RGBColorFormat<u8>> for Rgb<u8> {
    fn from(value: RGBColorFormat<u8>) -> Self {
        Rgb([value.red, value.green, value.blue])
    }
}

impl Display for RGBColorFormat<u8> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

impl FromStr for RGBColorFormat<u8> {
    type Err = Error;

    /// Parses `"r,g,b"` with each component in `0..=255`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColourTriple(value.to_owned());
        let mut components = value.split(',').map(|component| component.trim().parse::<u8>());
        let mut next_component = || match components.next() {
            Some(Ok(component)) => Ok(component),
            _ => Err(invalid()),
        };
        let red = next_component()?;
        let green = next_component()?;
        let blue = next_component()?;
        if components.next().is_some() {
            return Err(invalid());
        }
        Ok(RGBColorFormat { red, green, blue })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColourSelector {
    Red,
    Green,
    Blue,
}

impl ColourSelector {
    /// Whether `dot` counts as dominant in the selected channel.
    pub fn is_dominant(&self, dot: RGBColorFormat<u8>) -> bool {
        let RGBColorFormat { red, green, blue } = dot;
        match self {
            Self::Red => {
                red >= RED_MINIMUM && red > green && red > blue && red - blue >= CHANNEL_MARGIN
            }
            Self::Green => {
                green >= GREEN_MINIMUM
                    && green > red
                    && green > blue
                    && green - red >= CHANNEL_MARGIN
            }
            Self::Blue => {
                blue >= BLUE_MINIMUM && blue > green && blue > red && blue - red >= CHANNEL_MARGIN
            }
        }
    }
}

impl FromStr for ColourSelector {
    type Err = Error;

    /// Only the first character counts, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let first = value.chars().next().map(|c| c.to_ascii_lowercase());
        match first {
            Some('r') => Ok(Self::Red),
            Some('g') => Ok(Self::Green),
            Some('b') => Ok(Self::Blue),
            _ => Err(Error::UnrecognisedColour(value.to_owned())),
        }
    }
}

impl Display for ColourSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ColourSelector, RGBColorFormat};
    use crate::error::Error;

    fn dot(red: u8, green: u8, blue: u8) -> RGBColorFormat<u8> {
        RGBColorFormat::new(red, green, blue)
    }

    #[test]
    fn parse_selector_uses_first_character_only() {
        assert_eq!("r".parse::<ColourSelector>().unwrap(), ColourSelector::Red);
        assert_eq!("Red".parse::<ColourSelector>().unwrap(), ColourSelector::Red);
        assert_eq!("rose".parse::<ColourSelector>().unwrap(), ColourSelector::Red);
        assert_eq!("GREEN".parse::<ColourSelector>().unwrap(), ColourSelector::Green);
        assert_eq!("blue".parse::<ColourSelector>().unwrap(), ColourSelector::Blue);
        assert_eq!("B".parse::<ColourSelector>().unwrap(), ColourSelector::Blue);
    }

    #[test]
    fn parse_unrecognised_selector() {
        for value in ["x", "", "purple", " red", "yellow"] {
            match value.parse::<ColourSelector>() {
                Err(Error::UnrecognisedColour(colour)) => assert_eq!(colour, value),
                other => panic!("Expected unrecognised colour for '{}', got {:?}", value, other),
            }
        }
    }

    #[test]
    fn red_dominance_thresholds() {
        let red = ColourSelector::Red;
        assert!(red.is_dominant(dot(200, 0, 0)));
        assert!(red.is_dominant(dot(120, 0, 110)));
        assert!(!red.is_dominant(dot(119, 0, 0)), "red below minimum");
        assert!(!red.is_dominant(dot(120, 0, 111)), "margin over blue too small");
        assert!(!red.is_dominant(dot(150, 150, 0)), "green ties red");
        assert!(!red.is_dominant(dot(0, 0, 0)));
    }

    #[test]
    fn green_dominance_thresholds() {
        let green = ColourSelector::Green;
        assert!(green.is_dominant(dot(0, 95, 0)));
        assert!(green.is_dominant(dot(85, 95, 94)));
        assert!(!green.is_dominant(dot(0, 94, 0)), "green below minimum");
        assert!(!green.is_dominant(dot(86, 95, 0)), "margin over red too small");
        assert!(!green.is_dominant(dot(0, 95, 95)), "blue ties green");
    }

    #[test]
    fn blue_dominance_thresholds() {
        let blue = ColourSelector::Blue;
        assert!(blue.is_dominant(dot(0, 0, 95)));
        assert!(blue.is_dominant(dot(85, 94, 95)));
        assert!(!blue.is_dominant(dot(0, 0, 94)), "blue below minimum");
        assert!(!blue.is_dominant(dot(86, 0, 95)), "margin over red too small");
        assert!(!blue.is_dominant(dot(0, 200, 200)), "green ties blue");
    }

    #[test]
    fn no_dot_is_dominant_in_two_channels() {
        let selectors = [ColourSelector::Red, ColourSelector::Green, ColourSelector::Blue];
        for red in 0..=255u8 {
            for green in 0..=255u8 {
                for blue in 0..=255u8 {
                    let matches = selectors
                        .iter()
                        .filter(|selector| selector.is_dominant(dot(red, green, blue)))
                        .count();
                    assert!(
                        matches <= 1,
                        "({}, {}, {}) is dominant in {} channels",
                        red,
                        green,
                        blue,
                        matches
                    );
                }
            }
        }
    }

    #[test]
    fn parse_colour_triple() {
        assert_eq!("255,0,12".parse::<RGBColorFormat<u8>>().unwrap(), dot(255, 0, 12));
        assert_eq!(" 1, 2 ,3".parse::<RGBColorFormat<u8>>().unwrap(), dot(1, 2, 3));
    }

    #[test]
    fn parse_invalid_colour_triple() {
        for value in ["", "1,2", "1,2,3,4", "256,0,0", "a,b,c", "-1,0,0"] {
            assert!(
                matches!(
                    value.parse::<RGBColorFormat<u8>>(),
                    Err(Error::InvalidColourTriple(_))
                ),
                "'{}' should be rejected",
                value
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let colour = dot(10, 20, 30);
        assert_eq!(colour.to_string(), "10,20,30");
        assert_eq!(colour.to_string().parse::<RGBColorFormat<u8>>().unwrap(), colour);
    }
}
