use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use typed_builder::TypedBuilder;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HallFormError {
    #[error("hall name must not be empty")]
    EmptyName,
    #[error("hall location must not be empty")]
    EmptyLocation,
    #[error("hall capacity must be at least 1")]
    NoCapacity,
    #[error("hall price per day must not be negative (got {0})")]
    NegativePrice(Decimal),
    #[error("nothing to update")]
    NothingToUpdate,
}

#[derive(Debug, Clone, Serialize, TypedBuilder)]
pub struct InsertHallForm<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub capacity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_day: Decimal,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[builder(default)]
    pub images: Vec<&'a str>,
}

impl InsertHallForm<'_> {
    pub fn validate(&self) -> Result<(), HallFormError> {
        check_name(self.name)?;
        check_location(self.location)?;
        check_capacity(self.capacity)?;
        check_price(self.price_per_day)
    }
}

#[derive(Debug, Default, Clone, Serialize, TypedBuilder)]
#[builder(field_defaults(default))]
pub struct UpdateHallForm<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_per_day: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

impl UpdateHallForm<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.capacity.is_none()
            && self.price_per_day.is_none()
            && self.description.is_none()
    }

    pub fn validate(&self) -> Result<(), HallFormError> {
        if self.is_empty() {
            return Err(HallFormError::NothingToUpdate);
        }
        if let Some(name) = self.name {
            check_name(name)?;
        }
        if let Some(location) = self.location {
            check_location(location)?;
        }
        if let Some(capacity) = self.capacity {
            check_capacity(capacity)?;
        }
        if let Some(price) = self.price_per_day {
            check_price(price)?;
        }
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), HallFormError> {
    if name.trim().is_empty() {
        Err(HallFormError::EmptyName)
    } else {
        Ok(())
    }
}

fn check_location(location: &str) -> Result<(), HallFormError> {
    if location.trim().is_empty() {
        Err(HallFormError::EmptyLocation)
    } else {
        Ok(())
    }
}

fn check_capacity(capacity: u32) -> Result<(), HallFormError> {
    if capacity == 0 {
        Err(HallFormError::NoCapacity)
    } else {
        Ok(())
    }
}

fn check_price(price: Decimal) -> Result<(), HallFormError> {
    if price.is_sign_negative() && !price.is_zero() {
        Err(HallFormError::NegativePrice(price))
    } else {
        Ok(())
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> InsertHallForm<'static> {
        InsertHallForm::builder()
            .name("Lotus Banquet")
            .location("Pune")
            .capacity(300)
            .price_per_day(Decimal::new(1_000_050, 2))
            .build()
    }

    #[test]
    fn insert_form_serializes_price_as_number() {
        let value = serde_json::to_value(form()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Lotus Banquet",
                "location": "Pune",
                "capacity": 300,
                "price_per_day": 10000.5,
                "images": [],
            })
        );
    }

    #[test]
    fn insert_form_rules() {
        assert_eq!(form().validate(), Ok(()));

        let mut bad = form();
        bad.name = "  ";
        assert_eq!(bad.validate(), Err(HallFormError::EmptyName));

        let mut bad = form();
        bad.capacity = 0;
        assert_eq!(bad.validate(), Err(HallFormError::NoCapacity));

        let mut bad = form();
        bad.price_per_day = Decimal::NEGATIVE_ONE;
        assert_eq!(
            bad.validate(),
            Err(HallFormError::NegativePrice(Decimal::NEGATIVE_ONE))
        );

        let mut free = form();
        free.price_per_day = Decimal::ZERO;
        assert_eq!(free.validate(), Ok(()));
    }

    #[test]
    fn update_form_only_sends_changed_fields() {
        let form = UpdateHallForm::builder().capacity(Some(250)).build();
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({ "capacity": 250 })
        );

        assert_eq!(
            UpdateHallForm::default().validate(),
            Err(HallFormError::NothingToUpdate)
        );
        let form = UpdateHallForm::builder().location(Some("")).build();
        assert_eq!(form.validate(), Err(HallFormError::EmptyLocation));
    }
}
