use crate::errors::ValidationError;
use crate::models::NewDish;

/// Parses the leading number of `text`, ignoring anything after it
/// ("150г" is 150). Returns `None` when no digits lead the text.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Weight in grams; must be a positive number.
pub fn parse_weight(text: &str) -> Result<f64, ValidationError> {
    match parse_number(text) {
        Some(weight) if weight > 0.0 => Ok(weight),
        _ => Err(ValidationError::InvalidWeight),
    }
}

/// Raw text of the create-dish form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishForm {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
    pub fiber: String,
}

impl DishForm {
    /// Name and calories are required; blank macro fields count as zero.
    pub fn validate(&self) -> Result<NewDish, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() || self.calories.trim().is_empty() {
            return Err(ValidationError::MissingNameOrCalories);
        }
        let calories =
            parse_number(&self.calories).ok_or(ValidationError::MissingNameOrCalories)?;

        Ok(NewDish {
            name: name.to_string(),
            calories,
            protein: optional_macro(&self.protein, "Белки")?,
            fat: optional_macro(&self.fat, "Жиры")?,
            carbs: optional_macro(&self.carbs, "Углеводы")?,
            fiber: optional_macro(&self.fiber, "Клетчатка")?,
        })
    }
}

fn optional_macro(text: &str, label: &'static str) -> Result<f64, ValidationError> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    parse_number(text).ok_or(ValidationError::InvalidMacro(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_numbers() {
        assert_eq!(parse_number("150"), Some(150.0));
        assert_eq!(parse_number(" 12.5г"), Some(12.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("3."), Some(3.0));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number("1e2 grams"), Some(100.0));
        assert_eq!(parse_number("7e"), Some(7.0));
    }

    #[test]
    fn rejects_text_without_leading_digits() {
        for raw in ["", "   ", "abc", ".", "-", "г150"] {
            assert_eq!(parse_number(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn weight_must_be_positive() {
        assert_eq!(parse_weight("200"), Ok(200.0));
        assert_eq!(parse_weight("0"), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight("-5"), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight("много"), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn dish_form_defaults_blank_macros_to_zero() {
        let form = DishForm {
            name: "Гречка".into(),
            calories: "343".into(),
            protein: "12.6".into(),
            ..DishForm::default()
        };
        let dish = form.validate().unwrap();
        assert_eq!(dish.name, "Гречка");
        assert_eq!(dish.calories, 343.0);
        assert_eq!(dish.protein, 12.6);
        assert_eq!(dish.fat, 0.0);
        assert_eq!(dish.carbs, 0.0);
        assert_eq!(dish.fiber, 0.0);
    }

    #[test]
    fn dish_form_requires_name_and_calories() {
        let missing_name = DishForm {
            calories: "100".into(),
            ..DishForm::default()
        };
        assert_eq!(
            missing_name.validate(),
            Err(ValidationError::MissingNameOrCalories)
        );

        let missing_calories = DishForm {
            name: "Soup".into(),
            ..DishForm::default()
        };
        assert_eq!(
            missing_calories.validate(),
            Err(ValidationError::MissingNameOrCalories)
        );
    }

    #[test]
    fn dish_form_rejects_garbage_macro() {
        let form = DishForm {
            name: "Soup".into(),
            calories: "40".into(),
            fat: "lots".into(),
            ..DishForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidMacro("Жиры")));
    }
}
