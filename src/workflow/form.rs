use crate::model::{VariantRecord, VariantUpdate};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// The two operator-editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Price,
    Stock,
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(FormField::Price),
            "stock" => Ok(FormField::Stock),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::Price => f.write_str("price"),
            FormField::Stock => f.write_str("stock"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Price must be a non-negative number, got {0:?}")]
    InvalidPrice(String),

    #[error("Stock must be a non-negative whole number, got {0:?}")]
    InvalidStock(String),
}

/// Raw text of the edit form, seeded from the selected record.
///
/// Values are stored verbatim; nothing is checked until [`EditForm::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub price: String,
    pub stock: String,
}

impl EditForm {
    pub fn from_record(record: &VariantRecord) -> Self {
        Self {
            price: record.price.to_string(),
            stock: record.stock.to_string(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Price => self.price = value,
            FormField::Stock => self.stock = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Price => &self.price,
            FormField::Stock => &self.stock,
        }
    }

    /// Turns the text into well-typed values or reports the first bad field.
    pub fn parse(&self) -> Result<VariantUpdate, FormError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| FormError::InvalidPrice(self.price.clone()))?;
        let stock = self
            .stock
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidStock(self.stock.clone()))?;
        Ok(VariantUpdate::new(price, stock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str, stock: &str) -> EditForm {
        EditForm {
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn seeds_from_record_as_text() {
        let record = VariantRecord::new(1028, "MEDIUM", 1023, 15.0, 11);
        assert_eq!(EditForm::from_record(&record), form("15", "11"));

        let record = VariantRecord::new(1, "X", 1, 12.75, 0);
        assert_eq!(EditForm::from_record(&record), form("12.75", "0"));
    }

    #[test]
    fn parses_valid_text() {
        assert_eq!(form("15", "20").parse().unwrap(), VariantUpdate::new(15.0, 20));
        assert_eq!(form(" 0.99 ", "0").parse().unwrap(), VariantUpdate::new(0.99, 0));
    }

    #[test]
    fn rejects_invalid_text() {
        assert_eq!(form("", "1").parse(), Err(FormError::InvalidPrice(String::new())));
        assert_eq!(form("abc", "1").parse(), Err(FormError::InvalidPrice("abc".into())));
        assert_eq!(form("-1", "1").parse(), Err(FormError::InvalidPrice("-1".into())));
        assert_eq!(form("NaN", "1").parse(), Err(FormError::InvalidPrice("NaN".into())));
        assert_eq!(form("inf", "1").parse(), Err(FormError::InvalidPrice("inf".into())));
        assert_eq!(form("1", "-3").parse(), Err(FormError::InvalidStock("-3".into())));
        assert_eq!(form("1", "2.5").parse(), Err(FormError::InvalidStock("2.5".into())));
    }

    #[test]
    fn set_and_get_address_one_field() {
        let mut form = form("15", "11");
        form.set(FormField::Stock, "20".to_string());
        assert_eq!(form.get(FormField::Stock), "20");
        assert_eq!(form.get(FormField::Price), "15");
    }

    #[test]
    fn field_names_round_trip() {
        assert_eq!("price".parse::<FormField>().unwrap(), FormField::Price);
        assert_eq!(FormField::Stock.to_string(), "stock");
        assert!("name".parse::<FormField>().is_err());
    }
}
