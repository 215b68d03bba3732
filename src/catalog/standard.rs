// ABOUTME: Bundled ingredient records with nutrition per 100 units, cost, allergens, and diet markers
// ABOUTME: Values are per 100 g (or 100 ml for liquids and foams), USDA-style approximations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{
    DietMarker, Ingredient, IngredientCategory, NutritionProfile, QualityTier,
};

use DietMarker::{AnimalDerived, BeeProduct, Dairy, Grain, HighSugar, Legume};
use IngredientCategory::{BaseFruit, Flavor, Foam, Liquid, Protein, Superfood, Sweetener};

/// Macros in order: calories, protein, carbs, fat, fiber, sugar
type Macros = [f64; 6];

fn item(
    id: &str,
    name: &str,
    category: IngredientCategory,
    macros: Macros,
    unit_cost: f64,
) -> Ingredient {
    let [calories, protein, carbs, fat, fiber, sugar] = macros;
    Ingredient::new(id, name, category)
        .with_nutrition(NutritionProfile::macros(
            calories, protein, carbs, fat, fiber, sugar,
        ))
        .with_cost(unit_cost)
}

fn compounds(mut ingredient: Ingredient, names: &[&str]) -> Ingredient {
    ingredient.nutrition = ingredient.nutrition.with_compounds(names);
    ingredient
}

fn fruits() -> Vec<Ingredient> {
    vec![
        item("banana", "Banana", BaseFruit, [89.0, 1.1, 22.8, 0.3, 2.6, 12.2], 0.40)
            .with_markers(&[HighSugar]),
        compounds(
            item("mango", "Mango", BaseFruit, [60.0, 0.8, 15.0, 0.4, 1.6, 13.7], 0.60),
            &["mangiferin"],
        )
        .with_markers(&[HighSugar]),
        compounds(
            item("blueberry", "Blueberry", BaseFruit, [57.0, 0.7, 14.5, 0.3, 2.4, 10.0], 1.50),
            &["anthocyanins", "pterostilbene"],
        ),
        compounds(
            item("strawberry", "Strawberry", BaseFruit, [32.0, 0.7, 7.7, 0.3, 2.0, 4.9], 1.00),
            &["fisetin", "ellagic-acid"],
        ),
        compounds(
            item("pineapple", "Pineapple", BaseFruit, [50.0, 0.5, 13.1, 0.1, 1.4, 9.9], 0.50),
            &["bromelain"],
        )
        .with_markers(&[HighSugar]),
        compounds(
            item("raspberry", "Raspberry", BaseFruit, [52.0, 1.2, 11.9, 0.7, 6.5, 4.4], 1.80),
            &["ellagic-acid"],
        ),
        compounds(
            item("papaya", "Papaya", BaseFruit, [43.0, 0.5, 10.8, 0.3, 1.7, 7.8], 0.70),
            &["papain"],
        ),
        item("avocado", "Avocado", BaseFruit, [160.0, 2.0, 8.5, 14.7, 6.7, 0.7], 1.20),
        compounds(
            item("acai", "Acai Puree", BaseFruit, [70.0, 1.0, 4.0, 5.0, 3.0, 0.0], 2.50),
            &["anthocyanins"],
        )
        .with_tier(QualityTier::Premium),
    ]
}

fn liquids() -> Vec<Ingredient> {
    vec![
        item("oat-milk", "Oat Milk", Liquid, [48.0, 1.0, 6.7, 1.5, 0.8, 4.0], 0.35)
            .with_markers(&[Grain]),
        item("almond-milk", "Almond Milk", Liquid, [15.0, 0.6, 0.3, 1.2, 0.2, 0.1], 0.40)
            .with_allergens(&["tree-nuts"]),
        item("coconut-milk", "Coconut Milk", Liquid, [31.0, 0.2, 2.9, 2.1, 0.0, 2.5], 0.45)
            .with_allergens(&["coconut"]),
        item("soy-milk", "Soy Milk", Liquid, [54.0, 3.3, 6.3, 1.8, 0.6, 4.0], 0.35)
            .with_allergens(&["soy"])
            .with_markers(&[Legume]),
        item("whole-milk", "Whole Milk", Liquid, [61.0, 3.2, 4.8, 3.3, 0.0, 5.1], 0.20)
            .with_allergens(&["dairy"])
            .with_markers(&[Dairy]),
        item("coconut-water", "Coconut Water", Liquid, [19.0, 0.7, 3.7, 0.2, 1.1, 2.6], 0.50)
            .with_allergens(&["coconut"]),
        compounds(
            item("green-tea", "Brewed Green Tea", Liquid, [1.0, 0.0, 0.2, 0.0, 0.0, 0.0], 0.15),
            &["egcg"],
        ),
    ]
}

fn proteins() -> Vec<Ingredient> {
    vec![
        item("whey-protein", "Whey Protein", Protein, [400.0, 80.0, 8.0, 6.0, 0.0, 4.0], 3.50)
            .with_allergens(&["dairy"])
            .with_markers(&[Dairy]),
        item("pea-protein", "Pea Protein", Protein, [380.0, 80.0, 4.0, 6.0, 4.0, 0.0], 3.00)
            .with_markers(&[Legume]),
        compounds(
            item("hemp-protein", "Hemp Protein", Protein, [370.0, 50.0, 20.0, 11.0, 18.0, 3.0], 3.20),
            &["omega-3"],
        ),
        compounds(
            item("greek-yogurt", "Greek Yogurt", Protein, [97.0, 9.0, 3.6, 5.0, 0.0, 3.6], 0.90),
            &["probiotics"],
        )
        .with_allergens(&["dairy"])
        .with_markers(&[Dairy]),
        compounds(
            item("coconut-yogurt", "Coconut Yogurt", Protein, [180.0, 1.5, 7.0, 17.0, 1.0, 3.0], 1.40),
            &["probiotics"],
        )
        .with_allergens(&["coconut"]),
        compounds(
            item("collagen-peptides", "Collagen Peptides", Protein, [360.0, 90.0, 0.0, 0.0, 0.0, 0.0], 4.50),
            &["glycine"],
        )
        .with_markers(&[AnimalDerived])
        .with_tier(QualityTier::Premium),
        item("peanut-butter", "Peanut Butter", Protein, [588.0, 25.0, 20.0, 50.0, 6.0, 9.0], 0.80)
            .with_allergens(&["peanuts"])
            .with_markers(&[Legume]),
        item("almond-butter", "Almond Butter", Protein, [614.0, 21.0, 19.0, 56.0, 10.0, 4.4], 1.60)
            .with_allergens(&["tree-nuts"]),
    ]
}

fn superfoods() -> Vec<Ingredient> {
    vec![
        compounds(
            item("brazil-nut", "Brazil Nut", Superfood, [659.0, 14.0, 12.0, 67.0, 7.5, 2.3], 3.00),
            &["selenium"],
        )
        .with_allergens(&["tree-nuts"])
        .with_tier(QualityTier::Premium)
        .with_serving(10.0),
        compounds(
            item("maca-powder", "Maca Powder", Superfood, [325.0, 14.0, 71.0, 1.0, 7.0, 32.0], 4.00),
            &["glucosinolates"],
        )
        .with_serving(10.0),
        compounds(
            item("matcha", "Ceremonial Matcha", Superfood, [324.0, 30.0, 39.0, 5.0, 38.0, 0.0], 12.00),
            &["egcg", "l-theanine"],
        )
        .with_tier(QualityTier::Luxury)
        .with_serving(10.0),
        compounds(
            item("chia-seeds", "Chia Seeds", Superfood, [486.0, 17.0, 42.0, 31.0, 34.0, 0.0], 1.20),
            &["omega-3"],
        )
        .with_serving(15.0),
        compounds(
            item("flax-seeds", "Flax Seeds", Superfood, [534.0, 18.0, 29.0, 42.0, 27.0, 1.6], 0.80),
            &["lignans", "omega-3"],
        )
        .with_serving(15.0),
        compounds(
            item("spirulina", "Spirulina", Superfood, [290.0, 57.0, 24.0, 8.0, 3.6, 3.1], 6.00),
            &["phycocyanin"],
        )
        .with_tier(QualityTier::Premium)
        .with_serving(10.0),
        compounds(
            item("spinach", "Baby Spinach", Superfood, [23.0, 2.9, 3.6, 0.4, 2.2, 0.4], 0.60),
            &["lutein"],
        )
        .with_serving(20.0),
        compounds(
            item("kale", "Kale", Superfood, [49.0, 4.3, 8.8, 0.9, 3.6, 2.3], 0.80),
            &["sulforaphane", "quercetin"],
        )
        .with_serving(20.0),
        compounds(
            item("turmeric", "Turmeric", Superfood, [312.0, 9.7, 67.0, 3.3, 22.0, 3.2], 2.50),
            &["curcumin"],
        )
        .with_serving(10.0),
        compounds(
            item("goji-berries", "Goji Berries", Superfood, [349.0, 14.0, 77.0, 0.4, 13.0, 46.0], 3.00),
            &["zeaxanthin"],
        )
        .with_markers(&[HighSugar])
        .with_serving(15.0),
        compounds(
            item("lions-mane", "Lion's Mane", Superfood, [300.0, 20.0, 60.0, 3.0, 30.0, 2.0], 9.00),
            &["hericenones"],
        )
        .with_tier(QualityTier::Luxury)
        .with_serving(10.0),
        compounds(
            item("moringa", "Moringa", Superfood, [205.0, 27.0, 38.0, 2.3, 19.0, 0.0], 4.00),
            &["quercetin"],
        )
        .with_serving(10.0),
        compounds(
            item("bee-pollen", "Bee Pollen", Superfood, [314.0, 24.0, 43.0, 5.0, 8.0, 20.0], 5.00),
            &["flavonoids"],
        )
        .with_markers(&[BeeProduct])
        .with_tier(QualityTier::Premium)
        .with_serving(10.0),
        compounds(
            item("inulin", "Chicory Inulin", Superfood, [150.0, 0.0, 90.0, 0.0, 86.0, 5.0], 1.50),
            &["prebiotics"],
        )
        .with_serving(10.0),
    ]
}

fn sweeteners() -> Vec<Ingredient> {
    vec![
        item("honey", "Raw Honey", Sweetener, [304.0, 0.3, 82.0, 0.0, 0.2, 82.0], 1.20)
            .with_markers(&[BeeProduct, HighSugar]),
        item("maple-syrup", "Maple Syrup", Sweetener, [260.0, 0.0, 67.0, 0.1, 0.0, 60.0], 1.60)
            .with_markers(&[HighSugar]),
        item("agave", "Agave Nectar", Sweetener, [310.0, 0.0, 76.0, 0.5, 0.2, 68.0], 1.10)
            .with_markers(&[HighSugar]),
        item("dates", "Medjool Dates", Sweetener, [277.0, 1.8, 75.0, 0.2, 6.7, 66.0], 1.00)
            .with_markers(&[HighSugar]),
        item("monk-fruit", "Monk Fruit", Sweetener, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 6.00)
            .with_tier(QualityTier::Premium),
    ]
}

fn flavors() -> Vec<Ingredient> {
    vec![
        compounds(
            item("cinnamon", "Ceylon Cinnamon", Flavor, [247.0, 4.0, 81.0, 1.2, 53.0, 2.2], 1.50),
            &["cinnamaldehyde"],
        ),
        item("vanilla", "Vanilla Bean", Flavor, [288.0, 0.1, 12.7, 0.1, 0.0, 12.7], 8.00)
            .with_tier(QualityTier::Premium),
        compounds(
            item("ginger", "Fresh Ginger", Flavor, [80.0, 1.8, 18.0, 0.8, 2.0, 1.7], 1.00),
            &["gingerols"],
        ),
        compounds(
            item("cacao-powder", "Raw Cacao", Flavor, [228.0, 20.0, 58.0, 14.0, 37.0, 1.8], 2.00),
            &["flavanols"],
        ),
        item("mint", "Fresh Mint", Flavor, [70.0, 3.8, 15.0, 0.9, 8.0, 0.0], 2.00),
        item("cardamom", "Cardamom", Flavor, [311.0, 11.0, 68.0, 7.0, 28.0, 0.0], 5.00)
            .with_tier(QualityTier::Premium),
    ]
}

fn foams() -> Vec<Ingredient> {
    vec![
        item("oat-foam", "Oat Foam", Foam, [60.0, 1.0, 8.0, 2.5, 0.8, 4.0], 0.60)
            .with_markers(&[Grain]),
        item("milk-foam", "Milk Foam", Foam, [61.0, 3.2, 4.8, 3.3, 0.0, 5.1], 0.40)
            .with_allergens(&["dairy"])
            .with_markers(&[Dairy]),
        item("coconut-foam", "Coconut Cream Foam", Foam, [120.0, 1.0, 3.0, 12.0, 0.0, 2.0], 0.90)
            .with_allergens(&["coconut"]),
        item("aquafaba-foam", "Aquafaba Foam", Foam, [18.0, 1.0, 2.9, 0.1, 0.3, 0.0], 0.50)
            .with_markers(&[Legume]),
    ]
}

/// All bundled ingredients in catalog order
pub(super) fn ingredients() -> Vec<Ingredient> {
    let mut all = fruits();
    all.extend(liquids());
    all.extend(proteins());
    all.extend(superfoods());
    all.extend(sweeteners());
    all.extend(flavors());
    all.extend(foams());
    all
}
