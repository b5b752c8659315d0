//! Static marketing content for the landing page sections.

use super::product::Category;
use crate::components::icon::IconKind;

/// Category card on the "Shop by Category" section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryCard {
    pub category: Category,
    pub description: &'static str,
    pub product_count: u32,
    /// CSS modifier selecting the card's tint.
    pub tint: &'static str,
}

pub static CATEGORY_CARDS: [CategoryCard; 4] = [
    CategoryCard {
        category: Category::Furniture,
        description: "Modern & comfortable furniture for your home",
        product_count: 85,
        tint: "amber",
    },
    CategoryCard {
        category: Category::Electronics,
        description: "Latest TVs, laptops & smart devices",
        product_count: 150,
        tint: "blue",
    },
    CategoryCard {
        category: Category::HomeAppliances,
        description: "Essential appliances for modern living",
        product_count: 120,
        tint: "green",
    },
    CategoryCard {
        category: Category::Mobiles,
        description: "Smartphones & accessories",
        product_count: 200,
        tint: "purple",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub logo: &'static str,
}

pub static BRANDS: [Brand; 6] = [
    Brand { name: "Samsung", logo: "https://upload.wikimedia.org/wikipedia/commons/2/24/Samsung_Logo.svg" },
    Brand { name: "LG", logo: "https://upload.wikimedia.org/wikipedia/commons/2/20/LG_symbol.svg" },
    Brand { name: "Sony", logo: "https://upload.wikimedia.org/wikipedia/commons/c/ca/Sony_logo.svg" },
    Brand { name: "Philips", logo: "https://upload.wikimedia.org/wikipedia/commons/5/52/Philips_logo_new.svg" },
    Brand { name: "Apple", logo: "https://upload.wikimedia.org/wikipedia/commons/f/fa/Apple_logo_black.svg" },
    Brand { name: "Dell", logo: "https://upload.wikimedia.org/wikipedia/commons/1/18/Dell_logo_2016.svg" },
];

/// Headline figure under the brand strip (value, label).
pub static STORE_STATS: [(&str, &str); 4] = [
    ("50+", "Premium Brands"),
    ("500+", "Products"),
    ("10K+", "Happy Customers"),
    ("24/7", "Support"),
];

/// Selling points shown as hero badges.
pub static HERO_FEATURES: [&str; 3] = ["2 Year Warranty", "Free Delivery", "Genuine Products"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    /// Whole stars out of five.
    pub rating: usize,
    pub text: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "Tech Enthusiast",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop",
        rating: 5,
        text: "Amazing experience! The Samsung TV I bought exceeded my expectations. Fast delivery \
               and excellent customer support. Will definitely shop here again!",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        role: "Business Owner",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop",
        rating: 5,
        text: "ElectroZone has become my go-to store for all electronics. Their prices are \
               unbeatable and the product quality is always top-notch. Highly recommended!",
    },
    Testimonial {
        id: 3,
        name: "Emily Davis",
        role: "Interior Designer",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop",
        rating: 5,
        text: "Bought multiple appliances for my new home. The team was incredibly helpful in \
               choosing the right products. Love the 2-year warranty on everything!",
    },
    Testimonial {
        id: 4,
        name: "David Wilson",
        role: "Software Engineer",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop",
        rating: 4,
        text: "Great selection of laptops and accessories. The MacBook Pro I purchased was \
               competitively priced and arrived in perfect condition. Excellent service!",
    },
];

/// Contact card on the contact section and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub title: &'static str,
    pub icon: IconKind,
    pub details: [&'static str; 2],
}

pub static CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo { title: "Visit Us", icon: IconKind::Pin, details: ["123 Electronics Avenue", "Tech City, TC 12345"] },
    ContactInfo { title: "Call Us", icon: IconKind::Phone, details: ["+1 (555) 123-4567", "+1 (555) 987-6543"] },
    ContactInfo { title: "Email Us", icon: IconKind::Mail, details: ["info@electrozone.com", "support@electrozone.com"] },
    ContactInfo {
        title: "Working Hours",
        icon: IconKind::Clock,
        details: ["Mon - Sat: 9:00 AM - 9:00 PM", "Sunday: 10:00 AM - 6:00 PM"],
    },
];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3022.2!2d-73.98!3d40.75\
!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zNDDCsDQ1JzAwLjAiTiA3M8KwNTgnNDguMCJX!5e0!3m2!1sen!2sus\
!4v1234567890";
