pub type ItemId = u32;
pub type Quantity = i32;

/// Quantity used whenever the entered text isn't a number.
pub const DEFAULT_QUANTITY: Quantity = 1;

/// Code points of the digit zero for every decimal digit run in the Basic
/// Multilingual Plane. Each run holds ten consecutive digits.
const DIGIT_ZEROS: [u32; 37] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80,
    0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0,
    0xFF10,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: Quantity,
    pub is_editing: bool,
}

impl Item {
    pub fn new(id: ItemId, name: String, quantity: Quantity) -> Self {
        Self {
            id,
            name,
            quantity,
            is_editing: false,
        }
    }
}

/// Parses free-form quantity text. No trimming is done: `"+3"`, `"-2"` and
/// full-width `"１２"` parse, `" 3"` falls back to [`DEFAULT_QUANTITY`].
pub fn parse_quantity(text: &str) -> Quantity {
    parse_decimal(text).unwrap_or(DEFAULT_QUANTITY)
}

/// True when `name` is empty or made only of whitespace. Besides the
/// Unicode space separators this counts the ASCII control whitespace and
/// the information separators U+001C..=U+001F, but not NEL (U+0085).
pub fn is_blank(name: &str) -> bool {
    name.chars().all(|c| match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    })
}

fn parse_decimal(text: &str) -> Option<Quantity> {
    let mut chars = text.chars().peekable();

    let negative = match chars.peek()? {
        '-' => {
            chars.next();
            true
        }
        '+' => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: Quantity = 0;
    let mut any_digit = false;

    for c in chars {
        let digit = decimal_digit(c)?;
        value = value.checked_mul(10)?;
        // Accumulate negatives downwards so i32::MIN still fits.
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
        any_digit = true;
    }

    any_digit.then_some(value)
}

fn decimal_digit(c: char) -> Option<Quantity> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit as Quantity);
    }

    let code = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|&zero| (code - zero) as Quantity)
}
