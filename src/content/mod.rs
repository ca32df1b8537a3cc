//! Static marketing content rendered alongside the catalog, and the
//! WhatsApp contact funnel.

use serde::{Deserialize, Serialize};

/// Prefilled message for the floating contact button.
pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "¡Hola! Me gustaría obtener más información sobre sus propiedades.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub experience: String,
    pub description: String,
    pub image: String,
    pub phone: String,
    /// International format without signs, e.g. 5215512345678
    pub whatsapp: String,
    pub email: String,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub client_name: String,
    pub role: String,
    pub comment: String,
    pub rating: u8,
}

impl Testimonial {
    pub fn new(id: u32, client_name: &str, role: &str, comment: &str, rating: u8) -> Self {
        Self {
            id,
            client_name: client_name.to_string(),
            role: role.to_string(),
            comment: comment.to_string(),
            rating: rating.min(5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub published_at: String,
    pub has_videos: bool,
}

/// Build a `wa.me` deep link with a URL-encoded prefilled message.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: 1,
            name: "Ana Martínez".to_string(),
            position: "Directora de Ventas".to_string(),
            experience: "12+ años de experiencia".to_string(),
            description: "Especializada en propiedades industriales y parques empresariales."
                .to_string(),
            image: "/agents/ana-martinez.jpg".to_string(),
            phone: "+52 55 1234 5678".to_string(),
            whatsapp: "525512345678".to_string(),
            email: "ana.martinez@industrialrealtyhub.com".to_string(),
            specialties: vec![
                "Propiedades industriales".to_string(),
                "Parques empresariales".to_string(),
                "Asesoría fiscal".to_string(),
            ],
        },
        Agent {
            id: 2,
            name: "Carlos Rodríguez".to_string(),
            position: "Asesor Senior".to_string(),
            experience: "8+ años de experiencia".to_string(),
            description: "Experto en locales comerciales y oficinas corporativas.".to_string(),
            image: "/agents/carlos-rodriguez.jpg".to_string(),
            phone: "+52 55 8765 4321".to_string(),
            whatsapp: "525587654321".to_string(),
            email: "carlos.rodriguez@industrialrealtyhub.com".to_string(),
            specialties: vec![
                "Locales comerciales".to_string(),
                "Oficinas".to_string(),
            ],
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            1,
            "Roberto Mendoza",
            "CEO, Logística Avanzada",
            "Excelente servicio y asesoría personalizada. Encontraron el almacén \
             perfecto para nuestra operación en tiempo récord.",
            5,
        ),
        Testimonial::new(
            2,
            "María Fernanda López",
            "Directora de Operaciones, Grupo Textil MX",
            "Nos acompañaron en todo el proceso de renta de nuestra nave en \
             Querétaro. Muy profesionales.",
            5,
        ),
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            title: "Cómo Elegir la Nave Industrial Perfecta para tu Negocio".to_string(),
            excerpt: "Descubre los factores clave que debes considerar al buscar una nave industrial."
                .to_string(),
            category: "Guías".to_string(),
            published_at: "15 Dic 2024".to_string(),
            has_videos: true,
        },
        BlogPost {
            title: "Tendencias en Bienes Raíces Industriales 2024".to_string(),
            excerpt: "Análisis del mercado inmobiliario industrial y las proyecciones para el próximo año."
                .to_string(),
            category: "Noticias".to_string(),
            published_at: "10 Dic 2024".to_string(),
            has_videos: false,
        },
        BlogPost {
            title: "Ventajas de Invertir en Propiedades Industriales".to_string(),
            excerpt: "Por qué las propiedades industriales son una excelente opción de inversión."
                .to_string(),
            category: "Inversión".to_string(),
            published_at: "5 Dic 2024".to_string(),
            has_videos: true,
        },
    ]
}
