// src/catalog.rs
use std::path::{Path, PathBuf};

/// One meal: the display name drawn on the placeholder and the description fed to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealEntry {
    pub name: &'static str,
    pub description: &'static str,
}

impl MealEntry {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }

    pub fn slug(&self) -> String {
        slug(self.name)
    }
}

pub const MEALS: &[MealEntry] = &[
    MealEntry::new(
        "Spaghetti Bolognese",
        "A plate of spaghetti with rich bolognese sauce, topped with grated cheese, served on a wooden chopping board",
    ),
    MealEntry::new(
        "Meatballs with Pasta",
        "Juicy meatballs served with penne pasta and tomato sauce, garnished with fresh herbs, on a wooden chopping board",
    ),
    MealEntry::new(
        "Pasta Bake",
        "Baked penne pasta with minced beef, tomato sauce, and melted cheese on top, served on a wooden chopping board",
    ),
    MealEntry::new(
        "Beef Burgers",
        "Two juicy beef burgers with melted cheese, lettuce, tomato, and onion, served on brioche buns, on a wooden chopping board",
    ),
    MealEntry::new(
        "Cottage Pie",
        "Traditional cottage pie with minced beef filling topped with creamy mashed potatoes, golden brown, on a wooden chopping board",
    ),
    MealEntry::new(
        "Chilli Con Carne",
        "Spicy chilli con carne with minced beef, beans, and rice, topped with cheese and sour cream, on a wooden chopping board",
    ),
    MealEntry::new(
        "Beef Burrito",
        "Large flour tortilla filled with seasoned beef, rice, beans, cheese, and vegetables, wrapped and served on a wooden chopping board",
    ),
    MealEntry::new(
        "Beef Tacos",
        "Crispy taco shells filled with seasoned beef, lettuce, tomato, cheese, and salsa, arranged on a wooden chopping board",
    ),
    MealEntry::new(
        "Loaded Nachos",
        "Crispy tortilla chips topped with melted cheese, seasoned beef, jalapeños, sour cream, and guacamole, on a wooden chopping board",
    ),
    MealEntry::new(
        "Stuffed Peppers",
        "Bell peppers stuffed with seasoned beef, rice, and cheese, baked until tender, served on a wooden chopping board",
    ),
    MealEntry::new(
        "Chicken Pittas",
        "Grilled chicken breast in warm pitta bread with lettuce, tomato, and sauce, served on a wooden chopping board",
    ),
    MealEntry::new(
        "Chicken Burgers",
        "Grilled chicken breast burgers with melted cheese, lettuce, and tomato, served on brioche buns, on a wooden chopping board",
    ),
    MealEntry::new(
        "Chicken Curry",
        "Creamy chicken curry with tender chicken pieces, served over fluffy basmati rice, on a wooden chopping board",
    ),
    MealEntry::new(
        "Chicken Teriyaki",
        "Glazed teriyaki chicken with sticky sauce, served over steamed rice with vegetables, on a wooden chopping board",
    ),
    MealEntry::new(
        "Sweet and Sour Stir Fry",
        "Stir-fried chicken with colorful vegetables in sweet and sour sauce, served over egg noodles, on a wooden chopping board",
    ),
    MealEntry::new(
        "Chicken Fajitas",
        "Sizzling chicken fajitas with peppers and onions, served with warm tortillas and toppings, on a wooden chopping board",
    ),
];

/// Lowercase, spaces to hyphens, `&` to `and`.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-").replace('&', "and")
}

/// `<dir>/<slug>-food.jpg`
pub fn image_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}-food.jpg", slug(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slug_replaces_spaces_and_ampersands() {
        assert_eq!(slug("Beef Tacos"), "beef-tacos");
        assert_eq!(slug("Mac & Cheese"), "mac-and-cheese");
        assert_eq!(slug("Sweet and Sour Stir Fry"), "sweet-and-sour-stir-fry");
    }

    #[test]
    fn slug_is_idempotent() {
        for meal in MEALS {
            let once = slug(meal.name);
            assert_eq!(slug(&once), once);
        }
        assert_eq!(slug(&slug("Fish & Chips")), "fish-and-chips");
    }

    #[test]
    fn image_path_uses_food_suffix() {
        let path = image_path(Path::new("images"), "Beef Tacos");
        assert_eq!(path, Path::new("images/beef-tacos-food.jpg"));
    }

    #[test]
    fn catalog_slugs_do_not_collide() {
        let slugs: HashSet<String> = MEALS.iter().map(MealEntry::slug).collect();
        assert_eq!(slugs.len(), MEALS.len());
    }

    #[test]
    fn catalog_entries_are_populated() {
        assert_eq!(MEALS.len(), 16);
        assert!(MEALS.iter().all(|m| !m.name.is_empty() && !m.description.is_empty()));
        assert_eq!(MEALS[0].name, "Spaghetti Bolognese");
    }
}
