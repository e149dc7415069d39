#![forbid(unsafe_code)]

//! Static page content.
//!
//! Loaded once, never mutated. Text is pt-BR only.

use serde::Serialize;

use crate::section::SectionId;

pub const PRACTICE_NAME: &str = "ReumaVida";
pub const DOCTOR_NAME: &str = "Dra. Renata Monteiro Gabriel";
pub const TAGLINE: &str = "Reumatologia com empatia, ciência e escuta ativa";
pub const HERO_SUBTITLE: &str = "Atendimento humanizado e especializado na zona sul de São Paulo";
pub const HERO_BADGE: &str = "Reumatologista Especialista";

/// Google Maps embed for the office.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3657.267394283929!2d-46.7173897!3d-23.5660658!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94ce5038f5b85a91%3A0x9ec1cf5f66e4d4d6!2sAv.%20Adolfo%20Pinheiro%2C%201000%20-%20Santo%20Amaro%2C%20S%C3%A3o%20Paulo%20-%20SP!5e0!3m2!1spt-BR!2sbr!4v1695561234567!5m2!1spt-BR!2sbr";

/// External link opened in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    pub url: &'static str,
    pub target: &'static str,
    /// `window.open` features; keeps the opened page from reaching back.
    pub features: &'static str,
}

impl OutboundLink {
    #[must_use]
    pub const fn new_context(url: &'static str) -> Self {
        Self {
            url,
            target: "_blank",
            features: "noopener,noreferrer",
        }
    }
}

/// Appointment booking over WhatsApp.
pub const WHATSAPP: OutboundLink = OutboundLink::new_context("https://wa.me/5511948818047");

/// What a call-to-action button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// In-page navigation, same path as the nav controls.
    Navigate { section: SectionId },
    Open { link: OutboundLink },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub action: Action,
}

/// Hero buttons, in render order.
pub const HERO_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "Marcar consulta via WhatsApp",
        action: Action::Open { link: WHATSAPP },
    },
    CallToAction {
        label: "Sobre mim",
        action: Action::Navigate {
            section: SectionId::About,
        },
    },
];

/// Button under each specialty card.
pub const BOOK_APPOINTMENT: CallToAction = CallToAction {
    label: "Agendar consulta",
    action: Action::Open { link: WHATSAPP },
};

/// Button on the contact card.
pub const CONTACT_ACTION: CallToAction = CallToAction {
    label: "Entrar em contato via WhatsApp",
    action: Action::Open { link: WHATSAPP },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Specialty {
    pub title: &'static str,
    pub description: &'static str,
    /// Listed under "Sinais de alerta".
    pub warning_signs: &'static [&'static str],
}

pub const SPECIALTIES: [Specialty; 4] = [
    Specialty {
        title: "Artrite Reumatoide",
        description: "Doença inflamatória crônica autoimune que atinge principalmente as articulações, causando dor, inchaço, rigidez e perda de função.",
        warning_signs: &["Rigidez matinal > 1h", "Inchaço simétrico", "Fadiga constante"],
    },
    Specialty {
        title: "Lúpus Eritematoso Sistêmico",
        description: "Doença autoimune sistêmica que pode acometer articulações, pele, rins, pulmões, coração e sistema nervoso.",
        warning_signs: &["Dores articulares", "Manchas na pele", "Queda de cabelo"],
    },
    Specialty {
        title: "Fibromialgia",
        description: "Caracteriza-se por dor crônica difusa, fadiga e distúrbios do sono.",
        warning_signs: &["Dor em todo corpo > 3 meses", "Cansaço excessivo", "Névoa mental"],
    },
    Specialty {
        title: "Osteoporose",
        description: "Perda de massa óssea que aumenta o risco de fraturas, silenciosa e progressiva.",
        warning_signs: &["Histórico familiar", "Menopausa precoce", "Uso de corticoides"],
    },
];

/// Icon set entry the host renders next to a card. Names match the
/// `lucide` icon ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Stethoscope,
    Shield,
    Heart,
    MapPin,
}

/// Paragraph with an emphasized tail, rendered as `lead` + accent `emphasis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub lead: &'static str,
    pub emphasis: Option<&'static str>,
}

impl Paragraph {
    const fn plain(lead: &'static str) -> Self {
        Self {
            lead,
            emphasis: None,
        }
    }

    const fn emphasized(lead: &'static str, emphasis: &'static str) -> Self {
        Self {
            lead,
            emphasis: Some(emphasis),
        }
    }
}

/// "Quem sou eu" text.
pub const BIOGRAPHY: [Paragraph; 3] = [
    Paragraph::emphasized(
        "Sou médica Reumatologista com título de especialista pela Sociedade Brasileira de Reumatologia. Atuo com dedicação ao diagnóstico, acompanhamento e tratamento de doenças autoimunes e musculoesqueléticas, buscando sempre aliar",
        "ciência, empatia e escuta ativa",
    ),
    Paragraph::emphasized(
        "Natural de Manaus (AM), iniciei minha jornada na Medicina na Universidade do Estado do Amazonas. Realizei residência em Clínica Médica pela Secretaria Municipal de Saúde de São Paulo e especializei-me em Reumatologia no",
        "Hospital do Servidor Público Estadual de São Paulo (IAMSPE)",
    ),
    Paragraph::plain(
        "Moro há 7 anos na zona sul de São Paulo, na região da Avenida Interlagos, onde também atendo. Sou casada e mãe de gêmeas de 2 anos, que me ensinam diariamente sobre resiliência, amor e presença — valores que levo também para a prática médica.",
    ),
];

/// Small card in the "Quem sou eu" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: Icon::Stethoscope,
        title: "Especialização",
        detail: "Reumatologia - IAMSPE",
    },
    Highlight {
        icon: Icon::Shield,
        title: "Certificação",
        detail: "Sociedade Brasileira de Reumatologia",
    },
    Highlight {
        icon: Icon::Heart,
        title: "Abordagem",
        detail: "Empatia e escuta ativa",
    },
    Highlight {
        icon: Icon::MapPin,
        title: "Localização",
        detail: "Zona Sul - São Paulo",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub address_lines: &'static [&'static str],
    pub booking: OutboundLink,
}

pub const CONTACT: ContactDetails = ContactDetails {
    address_lines: &[
        "Avenida Adolfo Pinheiro, n°1000",
        "Conjunto 31 - Santo Amaro",
        "São Paulo - SP",
    ],
    booking: WHATSAPP,
};

/// Value chip on the approach card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Value {
    pub icon: Icon,
    pub label: &'static str,
}

/// "Minha Abordagem" card next to the contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Approach {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub values: &'static [Value],
}

pub const APPROACH: Approach = Approach {
    title: "Minha Abordagem",
    paragraphs: &[
        "Acredito que o cuidado em Reumatologia vai além da prescrição...",
        "Meu compromisso é oferecer um atendimento de qualidade...",
    ],
    values: &[Value {
        icon: Icon::Heart,
        label: "Empatia",
    }],
};

/// Text payload for hosts that render from JSON. Images, styling and the
/// section headings stay in the host markup.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageContent {
    pub practice_name: &'static str,
    pub doctor_name: &'static str,
    pub tagline: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_badge: &'static str,
    pub hero_actions: &'static [CallToAction],
    pub biography: &'static [Paragraph],
    pub highlights: &'static [Highlight],
    pub specialties: &'static [Specialty],
    pub book_appointment: CallToAction,
    pub contact: ContactDetails,
    pub contact_action: CallToAction,
    pub approach: Approach,
    pub map_embed_url: &'static str,
}

pub const PAGE: PageContent = PageContent {
    practice_name: PRACTICE_NAME,
    doctor_name: DOCTOR_NAME,
    tagline: TAGLINE,
    hero_subtitle: HERO_SUBTITLE,
    hero_badge: HERO_BADGE,
    hero_actions: &HERO_ACTIONS,
    biography: &BIOGRAPHY,
    highlights: &HIGHLIGHTS,
    specialties: &SPECIALTIES,
    book_appointment: BOOK_APPOINTMENT,
    contact: CONTACT,
    contact_action: CONTACT_ACTION,
    approach: APPROACH,
    map_embed_url: MAP_EMBED_URL,
};
