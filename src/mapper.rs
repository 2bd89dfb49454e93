//! Entity <-> DTO conversion, one pair per entity.
//! Foreign keys live only on entities, so the DTO -> entity direction takes them as arguments.

use crate::model::*;

impl From<&Pokemon> for PokemonDto {
    fn from(p: &Pokemon) -> Self {
        PokemonDto {
            id: p.id,
            name: p.name.clone(),
            birth_date: p.birth_date,
        }
    }
}

impl PokemonDto {
    pub fn into_entity(self) -> Pokemon {
        Pokemon {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        CategoryDto {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

impl CategoryDto {
    pub fn into_entity(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
        }
    }
}

impl From<&Country> for CountryDto {
    fn from(c: &Country) -> Self {
        CountryDto {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

impl CountryDto {
    pub fn into_entity(self) -> Country {
        Country {
            id: self.id,
            name: self.name,
        }
    }
}

impl From<&Owner> for OwnerDto {
    fn from(o: &Owner) -> Self {
        OwnerDto {
            id: o.id,
            first_name: o.first_name.clone(),
            last_name: o.last_name.clone(),
            gym: o.gym.clone(),
        }
    }
}

impl OwnerDto {
    pub fn into_entity(self, country_id: i32) -> Owner {
        Owner {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            gym: self.gym,
            country_id,
        }
    }
}

impl From<&Reviewer> for ReviewerDto {
    fn from(r: &Reviewer) -> Self {
        ReviewerDto {
            id: r.id,
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
        }
    }
}

impl ReviewerDto {
    pub fn into_entity(self) -> Reviewer {
        Reviewer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

impl From<&Review> for ReviewDto {
    fn from(r: &Review) -> Self {
        ReviewDto {
            id: r.id,
            title: r.title.clone(),
            text: r.text.clone(),
            rating: r.rating,
        }
    }
}

impl ReviewDto {
    pub fn into_entity(self, pokemon_id: i32, reviewer_id: i32) -> Review {
        Review {
            id: self.id,
            title: self.title,
            text: self.text,
            rating: self.rating,
            pokemon_id,
            reviewer_id,
        }
    }
}

/// Maps a slice of entities to their wire shapes.
pub fn to_dtos<E, D>(entities: &[E]) -> Vec<D>
where
    D: for<'a> From<&'a E>,
{
    entities.iter().map(D::from).collect()
}
