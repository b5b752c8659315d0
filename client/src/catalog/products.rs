//! Compiled-in product dataset.

use super::money::Money;
use super::product::{Category, Product, ProductId, Specification};

macro_rules! img {
    ($photo:literal) => {
        concat!("https://images.unsplash.com/", $photo, "?w=800&h=800&fit=crop")
    };
}

const fn spec(label: &'static str, value: &'static str) -> Specification {
    Specification { label, value }
}

/// Every product sold by the store, in catalog order.
pub static PRODUCTS: [Product; 8] = [
    Product {
        id: 1,
        name: "Samsung 55\" Smart TV",
        brand: "Samsung",
        category: Category::Electronics,
        price: Money::from_dollars(699),
        original_price: Money::from_dollars(899),
        rating: 4.8,
        images: &[
            img!("photo-1593359677879-a4bb92f829d1"),
            img!("photo-1461151304267-38535e780c79"),
            img!("photo-1571415060716-baff5f717c37"),
        ],
        badge: Some("Best Seller"),
        in_stock: true,
        description: "Crystal-clear 4K UHD picture with HDR10+, a built-in smart hub for every \
                      streaming service, and a slim bezel-less design that disappears on the wall.",
        features: &[
            "4K UHD resolution",
            "HDR10+ support",
            "Tizen smart platform",
            "Voice assistant built in",
            "Game mode with low input lag",
            "Three HDMI 2.1 ports",
        ],
        specifications: &[
            spec("Screen Size", "55 inches"),
            spec("Resolution", "3840 x 2160"),
            spec("Refresh Rate", "120 Hz"),
            spec("Connectivity", "Wi-Fi 5, Bluetooth 5.2, 3x HDMI, 2x USB"),
            spec("Warranty", "2 years"),
        ],
    },
    Product {
        id: 2,
        name: "iPhone 15 Pro Max",
        brand: "Apple",
        category: Category::Mobiles,
        price: Money::from_dollars(1199),
        original_price: Money::from_dollars(1299),
        rating: 4.9,
        images: &[
            img!("photo-1592750475338-74b7b21085ab"),
            img!("photo-1695048133142-1a20484d2569"),
        ],
        badge: Some("New"),
        in_stock: true,
        description: "Titanium design, the A17 Pro chip and a 5x telephoto camera system in \
                      Apple's largest Pro display.",
        features: &[
            "Titanium frame",
            "A17 Pro chip",
            "48 MP main camera",
            "5x optical zoom",
            "USB-C with USB 3 speeds",
            "Action button",
        ],
        specifications: &[
            spec("Display", "6.7-inch Super Retina XDR"),
            spec("Storage", "256 GB"),
            spec("Battery", "Up to 29 hours video playback"),
            spec("Water Resistance", "IP68"),
            spec("Warranty", "1 year"),
        ],
    },
    Product {
        id: 3,
        name: "LG Washing Machine",
        brand: "LG",
        category: Category::HomeAppliances,
        price: Money::from_dollars(549),
        original_price: Money::from_dollars(699),
        rating: 4.6,
        images: &[
            img!("photo-1626806787461-102c1bfaaea1"),
            img!("photo-1582735689369-4fe89db7114c"),
        ],
        badge: Some("20% Off"),
        in_stock: false,
        description: "Front-load washer with AI direct drive that picks the optimal wash motion \
                      for every fabric, plus steam cleaning that removes 99.9% of allergens.",
        features: &[
            "AI Direct Drive motor",
            "Steam allergen care",
            "8 kg capacity",
            "Inverter motor, 10 year warranty",
            "Smart diagnosis via app",
        ],
        specifications: &[
            spec("Capacity", "8 kg"),
            spec("Spin Speed", "1400 RPM"),
            spec("Energy Rating", "A+++"),
            spec("Dimensions", "600 x 850 x 565 mm"),
            spec("Warranty", "2 years"),
        ],
    },
    Product {
        id: 4,
        name: "Sony Wireless Headphones",
        brand: "Sony",
        category: Category::Electronics,
        price: Money::from_dollars(299),
        original_price: Money::from_dollars(349),
        rating: 4.7,
        images: &[
            img!("photo-1505740420928-5e560c06d30e"),
            img!("photo-1484704849700-f032a568e944"),
            img!("photo-1583394838336-acd977736f90"),
        ],
        badge: None,
        in_stock: true,
        description: "Industry-leading noise cancellation with two processors and eight \
                      microphones, 30 hours of battery and multipoint pairing.",
        features: &[
            "Adaptive noise cancellation",
            "30-hour battery life",
            "Quick charge: 3 min for 3 hours",
            "Multipoint Bluetooth",
            "Speak-to-chat",
        ],
        specifications: &[
            spec("Driver", "30 mm"),
            spec("Battery", "30 hours (ANC on)"),
            spec("Weight", "250 g"),
            spec("Connectivity", "Bluetooth 5.2, 3.5 mm jack"),
            spec("Warranty", "1 year"),
        ],
    },
    Product {
        id: 5,
        name: "Modern Office Chair",
        brand: "ErgoHome",
        category: Category::Furniture,
        price: Money::from_dollars(189),
        original_price: Money::from_dollars(249),
        rating: 4.5,
        images: &[
            img!("photo-1580480055273-228ff5388ef8"),
            img!("photo-1505843490538-5133c6c7d0e1"),
        ],
        badge: Some("Popular"),
        in_stock: true,
        description: "Breathable mesh back, adjustable lumbar support and 4D armrests for long \
                      days at the desk.",
        features: &[
            "Breathable mesh back",
            "Adjustable lumbar support",
            "4D armrests",
            "Tilt lock with tension control",
            "Supports up to 150 kg",
        ],
        specifications: &[
            spec("Material", "Mesh, nylon base"),
            spec("Seat Height", "45 - 55 cm"),
            spec("Max Load", "150 kg"),
            spec("Assembly", "Required, tools included"),
            spec("Warranty", "3 years"),
        ],
    },
    Product {
        id: 6,
        name: "MacBook Pro 14\"",
        brand: "Apple",
        category: Category::Electronics,
        price: Money::from_dollars(1999),
        original_price: Money::from_dollars(2199),
        rating: 4.9,
        images: &[
            img!("photo-1517336714731-489689fd1ca8"),
            img!("photo-1541807084-5c52b6b3adef"),
            img!("photo-1496181133206-80ce9b88a853"),
        ],
        badge: Some("Hot"),
        in_stock: true,
        description: "M3 Pro performance, a Liquid Retina XDR display and up to 18 hours of \
                      battery in a 1.6 kg aluminium body.",
        features: &[
            "Apple M3 Pro chip",
            "Liquid Retina XDR display",
            "18-hour battery life",
            "1080p FaceTime HD camera",
            "MagSafe 3 charging",
            "Three Thunderbolt 4 ports",
        ],
        specifications: &[
            spec("Display", "14.2-inch, 3024 x 1964"),
            spec("Memory", "18 GB unified"),
            spec("Storage", "512 GB SSD"),
            spec("Weight", "1.61 kg"),
            spec("Warranty", "1 year"),
        ],
    },
    Product {
        id: 7,
        name: "Samsung Galaxy S24",
        brand: "Samsung",
        category: Category::Mobiles,
        price: Money::from_dollars(899),
        original_price: Money::from_dollars(999),
        rating: 4.7,
        images: &[
            img!("photo-1610945265064-0e34e5519bbf"),
            img!("photo-1511707171634-5f897ff02aa9"),
        ],
        badge: None,
        in_stock: true,
        description: "Galaxy AI features, a 50 MP triple camera and a bright 120 Hz display in a \
                      compact aluminium frame.",
        features: &[
            "Galaxy AI live translate",
            "50 MP triple camera",
            "120 Hz Dynamic AMOLED",
            "7 years of OS updates",
            "IP68 water resistance",
        ],
        specifications: &[
            spec("Display", "6.2-inch Dynamic AMOLED 2X"),
            spec("Storage", "256 GB"),
            spec("Battery", "4000 mAh"),
            spec("Processor", "Snapdragon 8 Gen 3"),
            spec("Warranty", "1 year"),
        ],
    },
    Product {
        id: 8,
        name: "Philips Air Fryer",
        brand: "Philips",
        category: Category::HomeAppliances,
        price: Money::from_dollars(149),
        original_price: Money::from_dollars(199),
        rating: 4.6,
        images: &[
            img!("photo-1585771724684-38269d6639fd"),
            img!("photo-1648146195026-7e7d16d7c5b8"),
        ],
        badge: Some("25% Off"),
        in_stock: true,
        description: "Rapid Air technology fries, bakes and roasts with up to 90% less fat; the \
                      dishwasher-safe basket makes clean-up quick.",
        features: &[
            "Rapid Air technology",
            "4.1 L capacity",
            "Seven presets",
            "Dishwasher-safe parts",
            "Keep-warm function",
        ],
        specifications: &[
            spec("Capacity", "4.1 L"),
            spec("Power", "1400 W"),
            spec("Temperature Range", "80 - 200 °C"),
            spec("Timer", "Up to 60 minutes"),
            spec("Warranty", "2 years"),
        ],
    },
];

/// Look up a product by id.
#[must_use]
pub fn find_product(id: ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

