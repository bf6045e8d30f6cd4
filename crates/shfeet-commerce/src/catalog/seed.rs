//! The storefront's built-in product list.

use super::category::{Audience, ProductCategory};
use super::product::{Product, ProductColor};
use crate::money::Money;

fn black() -> ProductColor {
    ProductColor::new("Black", "#000000")
}

fn brown() -> ProductColor {
    ProductColor::new("Brown", "#8B4513")
}

fn tan() -> ProductColor {
    ProductColor::new("Tan", "#D2B48C")
}

fn white() -> ProductColor {
    ProductColor::new("White", "#FFFFFF")
}

const ADULT_SIZES: [&str; 6] = ["40", "41", "42", "43", "44", "45"];
const WOMEN_SIZES: [&str; 5] = ["37", "38", "39", "40", "41"];
const KIDS_SIZES: [&str; 5] = ["28", "30", "32", "34", "35"];

/// Products sold by the store, in listing order.
pub fn storefront_products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Classic Leather Slide",
            Money::naira(5_000),
            ProductCategory::Slides,
            Audience::Men,
        )
        .with_description("Hand-stitched full-grain leather slide with a cushioned footbed.")
        .with_images(["/images/products/classic-slide-1.jpg", "/images/products/classic-slide-2.jpg"])
        .with_sizes(ADULT_SIZES)
        .with_colors(vec![black(), brown()])
        .featured()
        .with_rating(4.8)
        .with_most_bought(120),
        Product::new(
            "2",
            "Criss-Cross Palm Slippers",
            Money::naira(8_500),
            ProductCategory::Slides,
            Audience::Women,
        )
        .with_description("Soft leather straps crossed over a lightweight sole.")
        .with_images(["/images/products/criss-cross-1.jpg"])
        .with_sizes(WOMEN_SIZES)
        .with_colors(vec![tan(), black()])
        .with_rating(4.5)
        .with_most_bought(85),
        Product::new(
            "3",
            "Trekker Strap Sandal",
            Money::naira(12_000),
            ProductCategory::Sandals,
            Audience::Men,
        )
        .with_description("Adjustable double-strap sandal with a rugged outsole.")
        .with_images(["/images/products/trekker-1.jpg", "/images/products/trekker-2.jpg"])
        .with_sizes(ADULT_SIZES)
        .with_colors(vec![brown(), black()])
        .featured()
        .with_rating(4.6)
        .with_most_bought(64),
        Product::new(
            "4",
            "Ankara Trim Sandal",
            Money::naira(9_500),
            ProductCategory::Sandals,
            Audience::Women,
        )
        .with_description("Leather sandal finished with an Ankara print strap.")
        .with_images(["/images/products/ankara-sandal-1.jpg"])
        .with_sizes(WOMEN_SIZES)
        .with_colors(vec![ProductColor::new("Multi", "#C2410C"), tan()])
        .with_rating(4.3),
        Product::new(
            "5",
            "Oxford Lace-Up",
            Money::naira(35_000),
            ProductCategory::Shoes,
            Audience::Men,
        )
        .with_description("Polished calfskin Oxford for formal occasions.")
        .with_images(["/images/products/oxford-1.jpg", "/images/products/oxford-2.jpg"])
        .with_sizes(ADULT_SIZES)
        .with_colors(vec![black(), brown()])
        .featured()
        .with_rating(4.9)
        .with_most_bought(40),
        Product::new(
            "6",
            "Penny Loafer",
            Money::naira(28_000),
            ProductCategory::Shoes,
            Audience::Men,
        )
        .with_description("Slip-on loafer with a leather sole and penny strap.")
        .with_images(["/images/products/loafer-1.jpg"])
        .with_sizes(ADULT_SIZES)
        .with_colors(vec![brown(), tan()])
        .with_rating(4.4)
        .with_most_bought(22),
        Product::new(
            "7",
            "Babouche Half Shoe",
            Money::naira(15_000),
            ProductCategory::HalfShoes,
            Audience::Men,
        )
        .with_description("Backless half shoe in soft suede.")
        .with_images(["/images/products/babouche-1.jpg"])
        .with_sizes(ADULT_SIZES)
        .with_colors(vec![black(), tan()])
        .with_rating(4.2)
        .with_most_bought(31),
        Product::new(
            "8",
            "Chelsea Boot",
            Money::naira(45_000),
            ProductCategory::Boots,
            Audience::Men,
        )
        .with_description("Elastic-sided Chelsea boot on a stacked heel.")
        .with_images(["/images/products/chelsea-1.jpg", "/images/products/chelsea-2.jpg"])
        .with_sizes(ADULT_SIZES)
        .with_colors(vec![black(), brown()])
        .featured()
        .with_rating(4.7),
        Product::new(
            "9",
            "Desert Ankle Boot",
            Money::naira(52_000),
            ProductCategory::Boots,
            Audience::Women,
        )
        .with_description("Suede ankle boot with a crepe sole.")
        .with_images(["/images/products/desert-boot-1.jpg"])
        .with_sizes(WOMEN_SIZES)
        .with_colors(vec![tan()])
        .out_of_stock()
        .with_rating(4.1),
        Product::new(
            "10",
            "Junior Velcro Sandal",
            Money::naira(6_500),
            ProductCategory::Kids,
            Audience::Children,
        )
        .with_description("Easy-on sandal with a padded strap for growing feet.")
        .with_images(["/images/products/junior-sandal-1.jpg"])
        .with_sizes(KIDS_SIZES)
        .with_colors(vec![brown(), white()])
        .with_rating(4.6)
        .with_most_bought(48),
        Product::new(
            "11",
            "Mini School Shoe",
            Money::naira(11_000),
            ProductCategory::Kids,
            Audience::Children,
        )
        .with_description("Scuff-resistant school shoe with a non-marking sole.")
        .with_images(["/images/products/mini-school-1.jpg"])
        .with_sizes(KIDS_SIZES)
        .with_colors(vec![black()])
        .with_rating(4.0),
        Product::new(
            "12",
            "Cork Footbed Two-Strap",
            Money::naira(25_000),
            ProductCategory::Birkenstock,
            Audience::Women,
        )
        .with_description("Contoured cork footbed with two adjustable buckles.")
        .with_images(["/images/products/two-strap-1.jpg", "/images/products/two-strap-2.jpg"])
        .with_sizes(WOMEN_SIZES)
        .with_colors(vec![tan(), white(), black()])
        .featured()
        .with_rating(4.8)
        .with_most_bought(73),
    ]
}
