use serde::{Deserialize, Serialize};

/// Closed set of property types offered by the listing catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Condo,
    Apartment,
    Townhouse,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Condo => "Condo",
            Self::Apartment => "Apartment",
            Self::Townhouse => "Townhouse",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Condo => "condo",
            Self::Apartment => "apartment",
            Self::Townhouse => "townhouse",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "house" => Some(Self::House),
            "condo" => Some(Self::Condo),
            "apartment" => Some(Self::Apartment),
            "townhouse" => Some(Self::Townhouse),
            _ => None,
        }
    }
}

/// Sale lifecycle of a listing as published by the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    ForSale,
    Pending,
    Sold,
}

impl PropertyStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ForSale => "For Sale",
            Self::Pending => "Pending",
            Self::Sold => "Sold",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ForSale => "for-sale",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "for-sale" => Some(Self::ForSale),
            "pending" => Some(Self::Pending),
            "sold" => Some(Self::Sold),
            _ => None,
        }
    }
}

/// Testimonial rating, carried on the wire as the keys "1" through "5".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl Rating {
    pub const fn stars(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

/// Select metafields arrive as a key plus a human-readable display value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectField<T> {
    pub key: T,
    pub value: String,
}

/// File metafield: the stored URL and its transformable CDN counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentImage {
    pub url: String,
    pub imgix_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub metadata: PropertyMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub address: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
    pub property_type: SelectField<PropertyType>,
    pub status: SelectField<PropertyStatus>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub property_images: Option<Vec<ContentImage>>,
    pub agent: Option<Agent>,
    pub neighborhood: Option<Neighborhood>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub metadata: AgentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMetadata {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub bio: Option<String>,
    pub years_of_experience: Option<u32>,
    pub specialties: Option<String>,
    pub profile_photo: Option<ContentImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub metadata: NeighborhoodMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodMetadata {
    pub neighborhood_name: String,
    pub description: Option<String>,
    pub features: Option<String>,
    pub average_price_range: Option<String>,
    pub neighborhood_photos: Option<Vec<ContentImage>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub metadata: ServiceMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub service_name: String,
    pub description: Option<String>,
    pub service_icon: Option<ContentImage>,
    pub featured: Option<bool>,
}

impl Service {
    pub fn is_featured(&self) -> bool {
        self.metadata.featured.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub metadata: TestimonialMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialMetadata {
    pub client_name: String,
    pub rating: SelectField<Rating>,
    pub review: String,
    pub client_photo: Option<ContentImage>,
    pub property_type_purchased: Option<String>,
}
