use serde::Serialize;

use crate::content::images::ImageTransform;
use crate::content::models::{Agent, Neighborhood, Property, Service, Testimonial};
use crate::filter::FilterCriteria;

const SITE_NAME: &str = "Prime Properties Real Estate";

/// Page metadata derived from the fetched entity, or a "not found" title
/// when the entity is absent.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn entity(name: &str, description: String) -> Self {
        Self {
            title: format!("{name} | {SITE_NAME}"),
            description: Some(description),
        }
    }

    pub fn not_found(kind_label: &str) -> Self {
        Self {
            title: format!("{kind_label} Not Found"),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyCardView {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub address: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
    pub property_type: &'static str,
    pub status: &'static str,
    pub status_key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PropertyCardView {
    pub fn from_property(property: &Property) -> Self {
        let meta = &property.metadata;
        let image = meta
            .property_images
            .as_deref()
            .and_then(|images| images.first())
            .map(|image| image.variant(ImageTransform::card()));

        Self {
            id: property.id.clone(),
            slug: property.slug.clone(),
            title: property.title.clone(),
            address: meta.address.clone(),
            price: meta.price,
            bedrooms: meta.bedrooms,
            bathrooms: meta.bathrooms,
            square_footage: meta.square_footage,
            property_type: meta.property_type.key.label(),
            status: meta.status.key.label(),
            status_key: meta.status.key.key(),
            image,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetailView {
    #[serde(flatten)]
    pub card: PropertyCardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    pub gallery: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentCardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<NeighborhoodCardView>,
}

impl PropertyDetailView {
    pub fn from_property(property: &Property) -> Self {
        let meta = &property.metadata;
        let gallery = meta
            .property_images
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|image| image.variant(ImageTransform::hero()))
            .collect();

        Self {
            card: PropertyCardView::from_property(property),
            description: meta.description.clone(),
            features: meta.features.clone(),
            gallery,
            agent: meta.agent.as_ref().map(AgentCardView::from_agent),
            neighborhood: meta
                .neighborhood
                .as_ref()
                .map(NeighborhoodCardView::from_neighborhood),
        }
    }

    pub fn meta(property: &Property) -> PageMeta {
        let meta = &property.metadata;
        let description = meta.description.clone().unwrap_or_else(|| {
            format!(
                "{} bed, {} bath property in {}",
                meta.bedrooms, meta.bathrooms, meta.address
            )
        });
        PageMeta::entity(&property.title, description)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentCardView {
    pub id: String,
    pub slug: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl AgentCardView {
    pub fn from_agent(agent: &Agent) -> Self {
        let meta = &agent.metadata;
        Self {
            id: agent.id.clone(),
            slug: agent.slug.clone(),
            full_name: meta.full_name.clone(),
            email: meta.email.clone(),
            phone: meta.phone.clone(),
            years_of_experience: meta.years_of_experience,
            specialties: meta.specialties.clone(),
            photo: meta
                .profile_photo
                .as_ref()
                .map(|image| image.variant(ImageTransform::portrait())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentDetailView {
    #[serde(flatten)]
    pub card: AgentCardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl AgentDetailView {
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            card: AgentCardView::from_agent(agent),
            bio: agent.metadata.bio.clone(),
        }
    }

    pub fn meta(agent: &Agent) -> PageMeta {
        let meta = &agent.metadata;
        let description = meta.bio.clone().unwrap_or_else(|| {
            format!(
                "Contact {} for expert real estate services",
                meta.full_name
            )
        });
        PageMeta::entity(&meta.full_name, description)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodCardView {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl NeighborhoodCardView {
    pub fn from_neighborhood(neighborhood: &Neighborhood) -> Self {
        let meta = &neighborhood.metadata;
        Self {
            id: neighborhood.id.clone(),
            slug: neighborhood.slug.clone(),
            name: meta.neighborhood_name.clone(),
            average_price_range: meta.average_price_range.clone(),
            photo: meta
                .neighborhood_photos
                .as_deref()
                .and_then(|photos| photos.first())
                .map(|image| image.variant(ImageTransform::card())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodDetailView {
    #[serde(flatten)]
    pub card: NeighborhoodCardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    pub photos: Vec<String>,
}

impl NeighborhoodDetailView {
    pub fn from_neighborhood(neighborhood: &Neighborhood) -> Self {
        let meta = &neighborhood.metadata;
        let photos = meta
            .neighborhood_photos
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|image| image.variant(ImageTransform::hero()))
            .collect();

        Self {
            card: NeighborhoodCardView::from_neighborhood(neighborhood),
            description: meta.description.clone(),
            features: meta.features.clone(),
            photos,
        }
    }

    pub fn meta(neighborhood: &Neighborhood) -> PageMeta {
        let meta = &neighborhood.metadata;
        let description = meta.description.clone().unwrap_or_else(|| {
            format!("Explore properties in {}", meta.neighborhood_name)
        });
        PageMeta::entity(&meta.neighborhood_name, description)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCardView {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub featured: bool,
}

impl ServiceCardView {
    pub fn from_service(service: &Service) -> Self {
        let meta = &service.metadata;
        Self {
            id: service.id.clone(),
            slug: service.slug.clone(),
            name: meta.service_name.clone(),
            description: meta.description.clone(),
            icon: meta
                .service_icon
                .as_ref()
                .map(|image| image.variant(ImageTransform::icon())),
            featured: service.is_featured(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialCardView {
    pub id: String,
    pub client_name: String,
    pub stars: u8,
    pub review: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type_purchased: Option<String>,
}

impl TestimonialCardView {
    pub fn from_testimonial(testimonial: &Testimonial) -> Self {
        let meta = &testimonial.metadata;
        Self {
            id: testimonial.id.clone(),
            client_name: meta.client_name.clone(),
            stars: meta.rating.key.stars(),
            review: meta.review.clone(),
            client_photo: meta
                .client_photo
                .as_ref()
                .map(|image| image.variant(ImageTransform::avatar())),
            property_type_purchased: meta.property_type_purchased.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomePageView {
    pub meta: PageMeta,
    pub featured_properties: Vec<PropertyCardView>,
    pub featured_services: Vec<ServiceCardView>,
    pub testimonials: Vec<TestimonialCardView>,
}

#[derive(Debug, Serialize)]
pub struct PropertiesPageView {
    pub meta: PageMeta,
    pub criteria: FilterCriteria,
    pub total: usize,
    pub showing: usize,
    pub properties: Vec<PropertyCardView>,
}

#[derive(Debug, Serialize)]
pub struct PropertyPageView {
    pub meta: PageMeta,
    pub property: PropertyDetailView,
}

#[derive(Debug, Serialize)]
pub struct AgentsPageView {
    pub meta: PageMeta,
    pub agents: Vec<AgentCardView>,
}

#[derive(Debug, Serialize)]
pub struct AgentPageView {
    pub meta: PageMeta,
    pub agent: AgentDetailView,
    pub listings: Vec<PropertyCardView>,
}

#[derive(Debug, Serialize)]
pub struct NeighborhoodsPageView {
    pub meta: PageMeta,
    pub neighborhoods: Vec<NeighborhoodCardView>,
}

#[derive(Debug, Serialize)]
pub struct NeighborhoodPageView {
    pub meta: PageMeta,
    pub neighborhood: NeighborhoodDetailView,
    pub listings: Vec<PropertyCardView>,
}

#[derive(Debug, Serialize)]
pub struct NotFoundView {
    pub meta: PageMeta,
}
