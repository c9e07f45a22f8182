//! Static page content.
//!
//! Everything here is fixed data rendered by the sections in `app`. Marketing
//! copy is available in every locale; the legal documents in [`legal`] are
//! English-only.

pub mod legal;

use crate::i18n::Localized;

/// Query appended to every hero image URL.
const HERO_IMAGE_PARAMS: &str = "auto=format&fit=crop&w=1920&q=80";

/// Image CDN warmed with a `preconnect` hint.
pub const IMAGE_ORIGIN: &str = "https://images.unsplash.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSlide {
    pub photo_id: &'static str,
    pub title: Localized,
    pub subtitle: Localized,
    pub description: Localized,
    pub alt: Localized,
}

impl HeroSlide {
    pub fn image_url(&self) -> String {
        format!("{IMAGE_ORIGIN}/{}?{HERO_IMAGE_PARAMS}", self.photo_id)
    }
}

pub const HERO_SLIDES: [HeroSlide; 4] = [
    HeroSlide {
        photo_id: "photo-1497436072909-60f360e1d4b1",
        title: Localized::new("Achieving Net Zero Through", "تحقيق الحياد الكربوني من خلال"),
        subtitle: Localized::new("Circular Innovation", "الابتكار الدائري"),
        description: Localized::new(
            "Transform your business with AI-powered sustainability solutions that drive measurable impact.",
            "حوّل أعمالك بحلول استدامة مدعومة بالذكاء الاصطناعي تحقق أثراً قابلاً للقياس.",
        ),
        alt: Localized::new(
            "Aerial view of a lush green forest symbolizing environmental sustainability",
            "منظر جوي لغابة خضراء كثيفة يرمز إلى الاستدامة البيئية",
        ),
    },
    HeroSlide {
        photo_id: "photo-1473341304170-971dccb5ac1e",
        title: Localized::new("Powering the Future with", "نصنع المستقبل عبر"),
        subtitle: Localized::new("Intelligent Solutions", "حلول ذكية"),
        description: Localized::new(
            "Leading the way in sustainable technology and carbon innovation.",
            "روّاد في التقنيات المستدامة وابتكارات الكربون.",
        ),
        alt: Localized::new(
            "Solar panels against a vibrant sunset representing renewable energy",
            "ألواح شمسية أمام غروب زاهٍ تمثل الطاقة المتجددة",
        ),
    },
    HeroSlide {
        photo_id: "photo-1451187580459-43490279c0fa",
        title: Localized::new("Building Tomorrow's", "نبني اقتصاد"),
        subtitle: Localized::new("Sustainable Economy", "الغد المستدام"),
        description: Localized::new(
            "Join us in creating a more sustainable future through technological innovation.",
            "انضم إلينا لصناعة مستقبل أكثر استدامة من خلال الابتكار التقني.",
        ),
        alt: Localized::new(
            "Digital visualization of sustainable technology and innovation",
            "تصور رقمي للتقنيات المستدامة والابتكار",
        ),
    },
    HeroSlide {
        photo_id: "photo-1593941707882-a5bba14938c7",
        title: Localized::new("Transforming Industries with", "نحوّل الصناعات عبر"),
        subtitle: Localized::new("AI Innovation", "ابتكارات الذكاء الاصطناعي"),
        description: Localized::new(
            "Harness the power of artificial intelligence to drive sustainable transformation.",
            "سخّر قوة الذكاء الاصطناعي لقيادة التحول المستدام.",
        ),
        alt: Localized::new(
            "Modern wind turbines at sunset representing clean energy technology",
            "توربينات رياح حديثة عند الغروب تمثل تقنيات الطاقة النظيفة",
        ),
    },
];

/// A titled card with a short body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: Localized,
    pub body: Localized,
}

pub const FEATURES: [Card; 3] = [
    Card {
        title: Localized::new("Built for Circular Impact", "مصمم للأثر الدائري"),
        body: Localized::new(
            "From CO₂ footprint intelligence to blockchain-backed traceability, Aidra is optimized to handle complex sustainability data: fast, scalable, and always audit-ready.",
            "من ذكاء البصمة الكربونية إلى التتبع المدعوم بسلاسل الكتل، صُممت Aidra للتعامل مع بيانات الاستدامة المعقدة بسرعة وقابلية للتوسع وجاهزية دائمة للتدقيق.",
        ),
    },
    Card {
        title: Localized::new("Trust at Every Step", "ثقة في كل خطوة"),
        body: Localized::new(
            "Transparency and compliance are built in, with AI-powered verification, secure data pipelines, and certified environmental actions aligned with global standards.",
            "الشفافية والامتثال جزء أساسي من المنصة، مع تحقق مدعوم بالذكاء الاصطناعي وقنوات بيانات آمنة وإجراءات بيئية معتمدة متوافقة مع المعايير العالمية.",
        ),
    },
    Card {
        title: Localized::new("AI-Powered & Predictive by Design", "ذكاء اصطناعي وتنبؤ في صميم التصميم"),
        body: Localized::new(
            "Mobile-first, field-ready, and intelligence-driven. Aidra brings AI to every layer of your operations: from customer care and smart routing to predictive insights and environmental analytics. Wherever your impact starts, Aidra is there.",
            "مصممة للجوال وجاهزة للميدان ومدفوعة بالذكاء. تجلب Aidra الذكاء الاصطناعي إلى كل طبقة من عملياتك: من خدمة العملاء والتوجيه الذكي إلى الرؤى التنبؤية والتحليلات البيئية. أينما بدأ أثرك، Aidra معك.",
        ),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub title: Localized,
    pub description: Localized,
    pub points: [Localized; 4],
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        title: Localized::new("Footprint Intelligence", "ذكاء البصمة الكربونية"),
        description: Localized::new(
            "Track your environmental impact at every level, from operations to individual products, with smart CO₂ calculation models and data-backed insights.",
            "تتبّع أثرك البيئي على كل المستويات، من العمليات إلى المنتجات الفردية، بنماذج ذكية لحساب ثاني أكسيد الكربون ورؤى مبنية على البيانات.",
        ),
        points: [
            Localized::new("Real-time CO₂ tracking", "تتبع ثاني أكسيد الكربون لحظياً"),
            Localized::new("Smart calculation models", "نماذج حساب ذكية"),
            Localized::new("Impact visualization", "عرض مرئي للأثر"),
            Localized::new("Data-driven insights", "رؤى مبنية على البيانات"),
        ],
    },
    Product {
        title: Localized::new("Traceability Engine", "محرك التتبع"),
        description: Localized::new(
            "Monitor material and waste flows in real-time across the value chain. Our system ensures full transparency from source to recovery, verified by blockchain.",
            "راقب تدفقات المواد والنفايات لحظياً عبر سلسلة القيمة. يضمن نظامنا شفافية كاملة من المصدر حتى الاسترداد، موثقة بسلاسل الكتل.",
        ),
        points: [
            Localized::new("Real-time monitoring", "مراقبة لحظية"),
            Localized::new("Blockchain verification", "تحقق عبر سلاسل الكتل"),
            Localized::new("Value chain tracking", "تتبع سلسلة القيمة"),
            Localized::new("Waste flow analytics", "تحليلات تدفق النفايات"),
        ],
    },
    Product {
        title: Localized::new("Carbon Credit Generator", "مولّد أرصدة الكربون"),
        description: Localized::new(
            "Turn reductions into value. Aidra automates the conversion of verified actions into certified carbon credits, aligned with global standards.",
            "حوّل التخفيضات إلى قيمة. تؤتمت Aidra تحويل الإجراءات الموثقة إلى أرصدة كربون معتمدة ومتوافقة مع المعايير العالمية.",
        ),
        points: [
            Localized::new("Automated conversion", "تحويل مؤتمت"),
            Localized::new("Global standard compliance", "امتثال للمعايير العالمية"),
            Localized::new("Credit certification", "اعتماد الأرصدة"),
            Localized::new("Value optimization", "تعظيم القيمة"),
        ],
    },
    Product {
        title: Localized::new("Compliance & Reporting Hub", "مركز الامتثال والتقارير"),
        description: Localized::new(
            "Stay aligned with national and international ESG frameworks through customizable dashboards and automated reporting tools.",
            "ابقَ متوافقاً مع أطر الحوكمة البيئية والاجتماعية الوطنية والدولية عبر لوحات معلومات قابلة للتخصيص وأدوات تقارير مؤتمتة.",
        ),
        points: [
            Localized::new("ESG framework alignment", "التوافق مع أطر ESG"),
            Localized::new("Custom dashboards", "لوحات معلومات مخصصة"),
            Localized::new("Automated reporting", "تقارير مؤتمتة"),
            Localized::new("Compliance tracking", "متابعة الامتثال"),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: Localized,
    pub description: Localized,
}

pub const VISION_STATS: [Stat; 3] = [
    Stat {
        value: "50–60M",
        label: Localized::new(
            "tons of waste generated annually in KSA",
            "طن من النفايات تُنتج سنوياً في المملكة",
        ),
        description: Localized::new(
            "An untapped opportunity for traceable, circular recovery.",
            "فرصة غير مستغلة للاسترداد الدائري القابل للتتبع.",
        ),
    },
    Stat {
        value: "130 GW",
        label: Localized::new(
            "renewable energy capacity targeted by 2030",
            "قدرة طاقة متجددة مستهدفة بحلول 2030",
        ),
        description: Localized::new(
            "Driving demand for measurable, tech-enabled decarbonization.",
            "ما يعزز الطلب على إزالة كربون قابلة للقياس ومدعومة بالتقنية.",
        ),
    },
    Stat {
        value: "150,000+",
        label: Localized::new("entities to be connected", "جهة سيتم ربطها"),
        description: Localized::new(
            "Enabling real-time sustainability tracking and participation in national carbon programs under the Saudi Green Initiative.",
            "لتمكين تتبع الاستدامة لحظياً والمشاركة في برامج الكربون الوطنية ضمن مبادرة السعودية الخضراء.",
        ),
    },
];

pub const MISSIONS: [Card; 3] = [
    Card {
        title: Localized::new("Measure What Matters", "قِس ما يهم"),
        body: Localized::new(
            "Turn environmental impact into data you can track, trust, and act on.",
            "حوّل الأثر البيئي إلى بيانات يمكنك تتبعها والوثوق بها والعمل بناءً عليها.",
        ),
    },
    Card {
        title: Localized::new("Operationalize Circularity", "فعّل الاقتصاد الدائري"),
        body: Localized::new(
            "Bring the circular economy to life with tools that work on the ground.",
            "اجعل الاقتصاد الدائري واقعاً بأدوات تعمل على أرض الميدان.",
        ),
    },
    Card {
        title: Localized::new("Achieve Net Zero", "حقق الحياد الكربوني"),
        body: Localized::new(
            "Turn ambition into results with real-time insights, verified actions, and carbon monetization.",
            "حوّل الطموح إلى نتائج برؤى لحظية وإجراءات موثقة وتحقيق عائد من الكربون.",
        ),
    },
];

pub const LOCATIONS: [Localized; 2] = [
    Localized::new("Aidra Tech KSA", "Aidra Tech السعودية"),
    Localized::new("Aidra Tech USA", "Aidra Tech الولايات المتحدة"),
];

pub const CTA_BENEFITS: [Localized; 3] = [
    Localized::new(
        "First-mover advantage in KSA's emerging carbon market",
        "ميزة السبق في سوق الكربون الناشئ في المملكة",
    ),
    Localized::new(
        "Early access to our Saudi-optimized platform",
        "وصول مبكر إلى منصتنا المهيأة للسوق السعودي",
    ),
    Localized::new(
        "Join our growing network of sustainability pioneers",
        "انضم إلى شبكتنا المتنامية من رواد الاستدامة",
    ),
];

pub const CONTACT_EMAIL: &str = "info@aidra.tech";
pub const CONTACT_LINKEDIN: &str = "https://linkedin.com/company/aidra";

/// Outbound links in the footer.
pub mod links {
    pub const APP_STORE: &str = "https://apps.apple.com/app/aidra";
    pub const APP_STORE_BADGE: &str =
        "https://developer.apple.com/assets/elements/badges/download-on-the-app-store.svg";
    pub const GOOGLE_PLAY: &str = "https://play.google.com/store/apps/details?id=com.aidra.app";
    pub const GOOGLE_PLAY_BADGE: &str =
        "https://play.google.com/intl/en_us/badges/static/images/badges/en_badge_web_generic.png";
    pub const INSTAGRAM: &str = "https://www.instagram.com/aidratech";
    pub const LINKEDIN: &str = "https://www.linkedin.com/company/aidra-tech";
}

/// Hero image URLs, in slide order.
pub fn hero_image_urls() -> Vec<String> {
    HERO_SLIDES.iter().map(HeroSlide::image_url).collect()
}
