use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Animal {
    // properties from the server
    pub id: AnimalId,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub votes: i64,
}

/// Server-assigned identifier. Some backends hand out numbers, others strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum AnimalId {
    Num(u64),
    Str(String),
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimalId::Num(n) => write!(f, "{}", n),
            AnimalId::Str(s) => f.write_str(s),
        }
    }
}

/// Body of a `POST /characters`. Only constructed through [`NewAnimal::from_form`].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewAnimal {
    pub name: String,
    pub image: String,
    pub votes: i64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a name for the animal.")]
    MissingName,
    #[error("Please enter a picture URL.")]
    MissingImage,
}

impl NewAnimal {
    /// Trim the raw form inputs and check that both are present.
    pub fn from_form(name: &str, image: &str) -> Result<NewAnimal, ValidationError> {
        let name = name.trim();
        let image = image.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if image.is_empty() {
            return Err(ValidationError::MissingImage);
        }
        Ok(NewAnimal {
            name: name.to_owned(),
            image: image.to_owned(),
            votes: 0,
        })
    }
}

/// Body of a `PATCH /characters/:id`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct VotesPatch {
    pub votes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_string_ids() {
        let body = r#"[
            {"id": 1, "name": "Mr. Cute", "image": "https://example.com/cute.jpg", "votes": 4},
            {"id": "a1b2", "name": "Lil' Bit", "image": "https://example.com/bit.jpg"}
        ]"#;
        let animals: Vec<Animal> = serde_json::from_str(body).unwrap();
        assert_eq!(animals[0].id, AnimalId::Num(1));
        assert_eq!(animals[0].votes, 4);
        assert_eq!(animals[1].id, AnimalId::Str("a1b2".to_owned()));
        assert_eq!(animals[1].votes, 0);
        assert_eq!(animals[1].id.to_string(), "a1b2");
    }

    #[test]
    fn new_animal_is_trimmed_and_starts_at_zero() {
        let animal = NewAnimal::from_form("  Bunny ", " https://example.com/b.png\n").unwrap();
        assert_eq!(animal.name, "Bunny");
        assert_eq!(animal.image, "https://example.com/b.png");
        assert_eq!(
            serde_json::to_value(&animal).unwrap(),
            serde_json::json!({"name": "Bunny", "image": "https://example.com/b.png", "votes": 0})
        );
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            NewAnimal::from_form("   ", "https://example.com/b.png"),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            NewAnimal::from_form("Bunny", ""),
            Err(ValidationError::MissingImage)
        );
        // name is checked first
        assert_eq!(NewAnimal::from_form("", ""), Err(ValidationError::MissingName));
    }
}
