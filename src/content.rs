//! Page copy. Everything here is static and rendered as-is.

use std::rc::Rc;

use crate::carousel::Testimonial;

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub end: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    (
        "Commercial Cleaning Associates has transformed our restaurant's cleanliness standards. Their attention to detail is unmatched, and our customers consistently comment on how pristine our establishment looks.",
        "Bill Michael",
        "Restaurant Owner, Phoenix",
        "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=3540&auto=format&fit=crop&ixlib=rb-4.0.3",
    ),
    (
        "As a medical facility, we require the highest standards of cleanliness. Commercial Cleaning Associates exceeds our expectations every single time with their specialized medical cleaning protocols.",
        "Dr. Sarah Johnson",
        "Medical Director, Scottsdale",
        "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?q=80&w=3540&auto=format&fit=crop&ixlib=rb-4.0.3",
    ),
    (
        "Our auto dealership has never looked better. The team understands the unique needs of our showroom and service areas, delivering exceptional results that help us maintain our premium brand image.",
        "Michael Rodriguez",
        "General Manager, Tempe Motors",
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=3540&auto=format&fit=crop&ixlib=rb-4.0.3",
    ),
    (
        "The level of professionalism and quality from Commercial Cleaning Associates is outstanding. They treat our resort with the care and attention it deserves, ensuring our guests always experience perfection.",
        "Jennifer Davis",
        "Resort Manager, Sedona",
        "https://www.baincapitalprivateequity.com/sites/default/files/team/SQ%20pref%200K6A7364.jpg",
    ),
];

pub fn testimonials() -> Rc<[Testimonial]> {
    TESTIMONIALS
        .iter()
        .map(|(quote, name, designation, image)| Testimonial::new(quote, name, designation, image))
        .collect::<Vec<_>>()
        .into()
}

pub const VALUES: &[Feature] = &[
    Feature {
        icon: "🛡️",
        title: "Accountability",
        description: "We take full responsibility for our work and stand behind every service we provide with unwavering commitment to excellence.",
        bullets: &[],
    },
    Feature {
        icon: "🤝",
        title: "Accessibility",
        description: "Available when you need us most, with flexible scheduling and responsive communication to meet your unique requirements.",
        bullets: &[],
    },
    Feature {
        icon: "🏆",
        title: "Service Excellence",
        description: "Delivering superior results through meticulous attention to detail and industry-leading cleaning standards.",
        bullets: &[],
    },
];

pub const BOUTIQUE_SERVICES: &[Feature] = &[
    Feature {
        icon: "🕒",
        title: "Nightly Janitorial Services",
        description: "Comprehensive daily cleaning to maintain your facility's professional appearance and hygiene standards.",
        bullets: &[],
    },
    Feature {
        icon: "✨",
        title: "Deep Cleaning Services",
        description: "Intensive cleaning for carpets, upholstery, and hard-to-reach areas to restore your space to pristine condition.",
        bullets: &[],
    },
    Feature {
        icon: "🛡️",
        title: "Sanitization & Disinfection",
        description: "Advanced sanitization protocols using hospital-grade disinfectants to ensure a safe, healthy environment.",
        bullets: &[],
    },
    Feature {
        icon: "🏢",
        title: "Floor Care & Maintenance",
        description: "Professional floor cleaning, waxing, and maintenance for all surface types including hardwood, tile, and carpet.",
        bullets: &[],
    },
    Feature {
        icon: "🎯",
        title: "Window Cleaning",
        description: "Crystal-clear windows inside and out, enhancing your building's appearance and natural light.",
        bullets: &[],
    },
    Feature {
        icon: "✅",
        title: "Specialty Services",
        description: "Customized cleaning solutions for unique requirements including post-construction cleanup and event preparation.",
        bullets: &[],
    },
];

pub const INDUSTRIES: &[Feature] = &[
    Feature {
        icon: "🍽️",
        title: "Restaurants & Food Service",
        description: "Health department compliant cleaning with specialized kitchen and dining area expertise.",
        bullets: &[],
    },
    Feature {
        icon: "❤️",
        title: "Medical Facilities",
        description: "Hospital-grade cleaning protocols ensuring the highest standards of hygiene and safety.",
        bullets: &[],
    },
    Feature {
        icon: "🚗",
        title: "Auto Dealerships",
        description: "Showroom-quality cleaning that maintains your vehicles' and facility's premium appearance.",
        bullets: &[],
    },
    Feature {
        icon: "🏨",
        title: "Resorts & Hospitality",
        description: "Luxury-level cleaning services that enhance guest experiences and maintain brand standards.",
        bullets: &[],
    },
    Feature {
        icon: "⛪",
        title: "Religious Institutions",
        description: "Respectful, thorough cleaning services that honor the sacred nature of your space.",
        bullets: &[],
    },
    Feature {
        icon: "🎓",
        title: "Educational Facilities",
        description: "Safe, healthy learning environments with cleaning schedules built around the school day.",
        bullets: &[],
    },
];

pub const ENHANCED_SERVICES: &[Feature] = &[
    Feature {
        icon: "🏢",
        title: "Complete Ceiling/Wall Restoration",
        description: "Transform your facility with our comprehensive restoration services",
        bullets: &["Acoustic Surfaces", "Vinyl & Cloth Covered", "Open Beam & Metal", "Concrete & Sheetrock", "FRP Surfaces"],
    },
    Feature {
        icon: "🛡️",
        title: "Kitchen Compliance Services",
        description: "Ensure your kitchen meets all regulatory standards",
        bullets: &["USDA Code Compliance", "AZ Fire Code Standards", "Stainless Steel Restoration", "Wall Restoration"],
    },
    Feature {
        icon: "✨",
        title: "High Dusting Services",
        description: "Specialized equipment for hard-to-reach areas",
        bullets: &["Light Fixtures", "Vent Caps", "Rafters & Beams", "Windowsills", "Extended Dust Removal"],
    },
    Feature {
        icon: "🏭",
        title: "Industrial Facilities",
        description: "Complete industrial and manufacturing plant cleaning",
        bullets: &["Manufacturing Plants", "Factory Cleaning", "Interior Services", "Exterior Services"],
    },
];

pub const STATS: &[Stat] = &[
    Stat { end: 500, suffix: "+", label: "Happy Clients" },
    Stat { end: 15, suffix: "+", label: "Years Experience" },
    Stat { end: 10_000, suffix: "+", label: "Projects Completed" },
    Stat { end: 98, suffix: "%", label: "Client Satisfaction" },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        icon: "📞",
        title: "Free Consultation",
        description: "We assess your facility and understand your specific cleaning needs",
    },
    ProcessStep {
        icon: "📄",
        title: "Custom Proposal",
        description: "Receive a detailed, competitive proposal tailored to your requirements",
    },
    ProcessStep {
        icon: "✨",
        title: "Test Clean",
        description: "Experience our quality with a complimentary test cleaning demonstration",
    },
    ProcessStep {
        icon: "✅",
        title: "Service Delivery",
        description: "Our skilled professionals deliver exceptional results using specialized equipment",
    },
    ProcessStep {
        icon: "🏆",
        title: "Quality Assurance",
        description: "Regular inspections and feedback ensure consistent excellence",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How often should commercial ceilings be professionally cleaned?",
        answer: "We recommend professional ceiling cleaning every 12-18 months for most facilities. However, kitchens and industrial spaces may require more frequent cleaning to maintain compliance and appearance standards.",
    },
    FaqEntry {
        question: "Do you offer emergency cleaning services?",
        answer: "Yes! Our experienced staff is available 24/7 for emergency cleaning situations. We understand that unexpected issues can arise, and we're here to help minimize disruption to your business.",
    },
    FaqEntry {
        question: "What makes your ceiling restoration different from regular cleaning?",
        answer: "Our ceiling restoration service goes beyond basic cleaning. We restore surfaces to their original white shine using specialized equipment and techniques, addressing acoustic tiles, vinyl, metal, and other materials while ensuring compliance with fire codes and USDA standards where applicable.",
    },
    FaqEntry {
        question: "How long does a typical commercial cleaning service take?",
        answer: "Service duration varies based on facility size and specific needs. We work efficiently to minimize disruption, often performing services during off-hours. We'll provide a detailed timeline during your free consultation.",
    },
    FaqEntry {
        question: "Are your cleaning products safe for food service environments?",
        answer: "Absolutely. We use USDA-approved, food-safe cleaning products in all kitchen and food service areas. Our team is trained in proper protocols to ensure your facility maintains compliance with all health department requirements.",
    },
];

pub const GUARANTEES: &[(&str, &str)] = &[
    ("✅", "Free Test Clean"),
    ("🕒", "24/7 Emergency Service"),
    ("🏆", "100% Satisfaction Guarantee"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonials_have_distinct_images() {
        let list = testimonials();
        assert_eq!(list.len(), 4);
        let mut images: Vec<_> = list.iter().map(|t| t.image_ref.as_str()).collect();
        images.sort_unstable();
        images.dedup();
        assert_eq!(images.len(), list.len());
    }
}
