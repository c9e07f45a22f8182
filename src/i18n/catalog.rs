//! Interface strings shared by the shell, forms and sections.

use super::Localized;

/// Catalog key for a short interface string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Text {
    // Navigation
    NavWhatWeDo,
    NavVision,
    NavAboutUs,
    NavCareers,
    NavCareersAria,
    SignIn,
    SignInAria,
    ToggleMenu,
    SelectLanguage,
    SwitchLanguage,

    // Hero
    Loading,
    PreviousSlide,
    NextSlide,
    GoToSlide,

    // Features
    FeaturesHeading,
    FeaturesIntro,

    // Products
    ProductsHeading,
    ProductsTagline,
    ProductsIntro,

    // Vision 2030
    VisionHeading,
    VisionIntro,
    VisionPartners,
    VisionNumbers,

    // About
    AboutHeading,
    AboutTagline,
    AboutInfrastructure,
    AboutPlatform,
    AboutMissionHeading,
    AboutReach,
    AboutMotto,
    ContactUs,

    // Call to action
    CtaBadge,
    CtaHeadingLead,
    CtaHeadingEmphasis,
    CtaBody,
    CtaEcosystemLead,
    CtaEcosystemPoints,
    CtaJoinNow,
    CtaJoinPitch,
    ModalTitle,
    ModalBody,
    CloseModal,
    FullName,
    BusinessEmail,
    CompanyName,
    SubmitRequest,
    Submitting,

    // Careers
    CareersHeading,
    CareersIntro,
    FullNameRequired,
    EmailRequired,
    LinkedinOptional,
    MessageRequired,
    MessagePlaceholder,
    UploadResume,
    UploadFile,
    DragAndDrop,
    ResumeHint,
    SubmitApplication,
    ThankYouTitle,
    ThankYouBody,
    SubmitFailed,

    // Validation
    ErrNameRequired,
    ErrNameLength,
    ErrNameCharacters,
    ErrEmailInvalid,
    ErrEmailTooLong,
    ErrCompanyLength,
    ErrLinkedinInvalid,
    ErrMessageRequired,
    ErrResumeRequired,
    ErrResumeType,
    ErrResumeSize,
    Dismiss,

    // Footer
    FooterCompany,
    FooterResources,
    FooterHelpCenter,
    FooterApiReference,
    FooterLegal,
    PrivacyPolicy,
    TermsOfUse,
    TermsShort,
    FooterMobileApps,
    AppStoreAria,
    GooglePlayAria,
    FooterFollow,
    InstagramAria,
    LinkedinAria,
    AllRightsReserved,

    // Legal pages
    LastUpdated,
    PrivacyTitle,
    TermsTitle,

    // Login & gated pages
    LoginTitle,
    LoginBody,
    LoginContinue,
    BackHome,
    CheckingSession,
    HelpTitle,
    HelpBody,
    ApiTitle,
    ApiBody,
    NotFoundTitle,
    NotFoundBody,
}

impl Text {
    /// Every key, for completeness checks.
    pub const ALL: &'static [Text] = &[
        Text::NavWhatWeDo,
        Text::NavVision,
        Text::NavAboutUs,
        Text::NavCareers,
        Text::NavCareersAria,
        Text::SignIn,
        Text::SignInAria,
        Text::ToggleMenu,
        Text::SelectLanguage,
        Text::SwitchLanguage,
        Text::Loading,
        Text::PreviousSlide,
        Text::NextSlide,
        Text::GoToSlide,
        Text::FeaturesHeading,
        Text::FeaturesIntro,
        Text::ProductsHeading,
        Text::ProductsTagline,
        Text::ProductsIntro,
        Text::VisionHeading,
        Text::VisionIntro,
        Text::VisionPartners,
        Text::VisionNumbers,
        Text::AboutHeading,
        Text::AboutTagline,
        Text::AboutInfrastructure,
        Text::AboutPlatform,
        Text::AboutMissionHeading,
        Text::AboutReach,
        Text::AboutMotto,
        Text::ContactUs,
        Text::CtaBadge,
        Text::CtaHeadingLead,
        Text::CtaHeadingEmphasis,
        Text::CtaBody,
        Text::CtaEcosystemLead,
        Text::CtaEcosystemPoints,
        Text::CtaJoinNow,
        Text::CtaJoinPitch,
        Text::ModalTitle,
        Text::ModalBody,
        Text::CloseModal,
        Text::FullName,
        Text::BusinessEmail,
        Text::CompanyName,
        Text::SubmitRequest,
        Text::Submitting,
        Text::CareersHeading,
        Text::CareersIntro,
        Text::FullNameRequired,
        Text::EmailRequired,
        Text::LinkedinOptional,
        Text::MessageRequired,
        Text::MessagePlaceholder,
        Text::UploadResume,
        Text::UploadFile,
        Text::DragAndDrop,
        Text::ResumeHint,
        Text::SubmitApplication,
        Text::ThankYouTitle,
        Text::ThankYouBody,
        Text::SubmitFailed,
        Text::ErrNameRequired,
        Text::ErrNameLength,
        Text::ErrNameCharacters,
        Text::ErrEmailInvalid,
        Text::ErrEmailTooLong,
        Text::ErrCompanyLength,
        Text::ErrLinkedinInvalid,
        Text::ErrMessageRequired,
        Text::ErrResumeRequired,
        Text::ErrResumeType,
        Text::ErrResumeSize,
        Text::Dismiss,
        Text::FooterCompany,
        Text::FooterResources,
        Text::FooterHelpCenter,
        Text::FooterApiReference,
        Text::FooterLegal,
        Text::PrivacyPolicy,
        Text::TermsOfUse,
        Text::TermsShort,
        Text::FooterMobileApps,
        Text::AppStoreAria,
        Text::GooglePlayAria,
        Text::FooterFollow,
        Text::InstagramAria,
        Text::LinkedinAria,
        Text::AllRightsReserved,
        Text::LastUpdated,
        Text::PrivacyTitle,
        Text::TermsTitle,
        Text::LoginTitle,
        Text::LoginBody,
        Text::LoginContinue,
        Text::BackHome,
        Text::CheckingSession,
        Text::HelpTitle,
        Text::HelpBody,
        Text::ApiTitle,
        Text::ApiBody,
        Text::NotFoundTitle,
        Text::NotFoundBody,
    ];

    pub fn localized(self) -> Localized {
        use Text::*;
        let (en, ar) = match self {
            NavWhatWeDo => ("What We Do", "ماذا نقدم"),
            NavVision => ("Saudi 2030 Vision", "رؤية السعودية 2030"),
            NavAboutUs => ("About Us", "من نحن"),
            NavCareers => ("Careers", "الوظائف"),
            NavCareersAria => (
                "View career opportunities at Aidra",
                "استعرض فرص العمل في أيدرا",
            ),
            SignIn => ("Sign In", "تسجيل الدخول"),
            SignInAria => ("Sign in to Aidra platform", "سجّل الدخول إلى منصة أيدرا"),
            ToggleMenu => ("Toggle navigation menu", "فتح أو إغلاق قائمة التنقل"),
            SelectLanguage => ("Select language", "اختر اللغة"),
            SwitchLanguage => ("Switch language", "تغيير اللغة"),

            Loading => ("Loading", "جارٍ التحميل"),
            PreviousSlide => ("Previous slide", "الشريحة السابقة"),
            NextSlide => ("Next slide", "الشريحة التالية"),
            GoToSlide => ("Go to slide", "انتقل إلى الشريحة"),

            FeaturesHeading => ("Why Choose Aidra", "لماذا أيدرا"),
            FeaturesIntro => (
                "The unified platform powering the circular economy for governments, industries, and carbon innovators.",
                "المنصة الموحدة التي تقود الاقتصاد الدائري للحكومات والصناعات ومبتكري الكربون.",
            ),

            ProductsHeading => ("What We Do", "ماذا نقدم"),
            ProductsTagline => (
                "One Platform. Multiple Sustainability Tools.",
                "منصة واحدة. أدوات استدامة متعددة.",
            ),
            ProductsIntro => (
                "Aidra's unified SaaS platform empowers businesses and institutions to measure, trace, and monetize their environmental impact — with built-in flexibility to support diverse sustainability goals.",
                "تمكّن منصة أيدرا الموحدة الشركات والمؤسسات من قياس أثرها البيئي وتتبعه وتحويله إلى قيمة، مع مرونة مدمجة لدعم أهداف الاستدامة المتنوعة.",
            ),

            VisionHeading => ("Scaling for National Impact", "التوسع من أجل أثر وطني"),
            VisionIntro => (
                "Aidra's unified platform is designed to power Saudi Arabia's circular transformation — from CO₂ footprint tracking to certified carbon credit monetization. Our technology is scaling to support the Kingdom's bold Vision 2030 targets across waste, energy, and emissions.",
                "صُممت منصة أيدرا الموحدة لدعم التحول الدائري في المملكة العربية السعودية، من تتبع البصمة الكربونية إلى تسييل أرصدة الكربون المعتمدة. تتوسع تقنيتنا لدعم مستهدفات رؤية 2030 الطموحة في النفايات والطاقة والانبعاثات.",
            ),
            VisionPartners => (
                "With a growing ecosystem of partners, we are laying the digital foundation for a new circular and carbon economy — starting in Saudi Arabia.",
                "مع منظومة متنامية من الشركاء، نضع الأساس الرقمي لاقتصاد دائري وكربوني جديد، انطلاقاً من المملكة العربية السعودية.",
            ),
            VisionNumbers => ("📈 Vision 2030 in Numbers", "📈 رؤية 2030 بالأرقام"),

            AboutHeading => ("About Us", "من نحن"),
            AboutTagline => (
                "Empowering the Carbon Economy with Intelligence, Traceability & Impact",
                "نمكّن اقتصاد الكربون بالذكاء والتتبع والأثر",
            ),
            AboutInfrastructure => (
                "At Aidra, we are building the infrastructure for a new carbon economy — where waste becomes value, emissions become verified credits, and sustainability becomes scalable.",
                "في أيدرا نبني البنية التحتية لاقتصاد كربوني جديد، حيث تتحول النفايات إلى قيمة والانبعاثات إلى أرصدة موثقة وتصبح الاستدامة قابلة للتوسع.",
            ),
            AboutPlatform => (
                "We combine AI, blockchain, and carbon finance into one unified platform that helps industries, governments, and landowners measure their environmental footprint, reduce emissions, and generate certified carbon credits.",
                "نجمع الذكاء الاصطناعي وسلسلة الكتل وتمويل الكربون في منصة واحدة تساعد الصناعات والحكومات وملاك الأراضي على قياس بصمتهم البيئية وخفض الانبعاثات وتوليد أرصدة كربون معتمدة.",
            ),
            AboutMissionHeading => (
                "Our Mission Is Clear and Actionable",
                "مهمتنا واضحة وقابلة للتنفيذ",
            ),
            AboutReach => (
                "From waste traceability to product-level CO₂ analysis and market-ready credit monetization, we deliver the tools to drive real change — starting in Saudi Arabia and scaling across the region.",
                "من تتبع النفايات إلى تحليل ثاني أكسيد الكربون على مستوى المنتج وتسييل الأرصدة الجاهزة للسوق، نقدم الأدوات لإحداث تغيير حقيقي، بدءاً من السعودية وصولاً إلى المنطقة.",
            ),
            AboutMotto => (
                "Built in the Gulf. Designed for the world. Scaled for a sustainable future.",
                "صُنع في الخليج. صُمم للعالم. يتوسع من أجل مستقبل مستدام.",
            ),
            ContactUs => ("Contact Us", "تواصل معنا"),

            CtaBadge => ("🇸🇦 Now Launching in Saudi Arabia", "🇸🇦 نطلق الآن في المملكة العربية السعودية"),
            CtaHeadingLead => ("Join the Movement to", "انضم إلى الحراك نحو"),
            CtaHeadingEmphasis => ("Monetize Sustainability", "تحويل الاستدامة إلى قيمة"),
            CtaBody => (
                "Aidra is now live in the Kingdom — uniting stakeholders to unlock new value from waste, emissions, and environmental data.",
                "أيدرا متاحة الآن في المملكة، تجمع أصحاب المصلحة لإطلاق قيمة جديدة من النفايات والانبعاثات والبيانات البيئية.",
            ),
            CtaEcosystemLead => (
                "Every new user strengthens the ecosystem:",
                "كل مستخدم جديد يعزز المنظومة:",
            ),
            CtaEcosystemPoints => (
                "More data. Smarter traceability. Greater carbon revenue potential.",
                "بيانات أكثر. تتبع أذكى. عوائد كربونية أكبر.",
            ),
            CtaJoinNow => ("Join Now", "انضم الآن"),
            CtaJoinPitch => (
                "Join us and be part of Saudi Arabia's sustainability journey",
                "انضم إلينا وكن جزءاً من رحلة الاستدامة في السعودية",
            ),
            ModalTitle => ("Join Aidra's Saudi Launch", "انضم إلى إطلاق أيدرا في السعودية"),
            ModalBody => (
                "Be among the first to access our platform in Saudi Arabia. Complete the form below and our team will contact you within 24 hours.",
                "كن من أوائل من يستخدمون منصتنا في السعودية. أكمل النموذج أدناه وسيتواصل معك فريقنا خلال 24 ساعة.",
            ),
            CloseModal => ("Close modal", "إغلاق النافذة"),
            FullName => ("Full Name", "الاسم الكامل"),
            BusinessEmail => ("Business Email", "البريد الإلكتروني للعمل"),
            CompanyName => ("Company Name", "اسم الشركة"),
            SubmitRequest => ("Submit Request", "إرسال الطلب"),
            Submitting => ("Submitting...", "جارٍ الإرسال..."),

            CareersHeading => ("Join the Aidra Mission", "انضم إلى مهمة أيدرا"),
            CareersIntro => (
                "We're always looking for talent passionate about sustainability, circular economy, and tech. If you want to contribute to building the future of carbon innovation — let's connect.",
                "نبحث دائماً عن المواهب الشغوفة بالاستدامة والاقتصاد الدائري والتقنية. إن أردت المساهمة في بناء مستقبل ابتكار الكربون، فلنتواصل.",
            ),
            FullNameRequired => ("Full Name *", "الاسم الكامل *"),
            EmailRequired => ("Email Address *", "البريد الإلكتروني *"),
            LinkedinOptional => ("LinkedIn Profile (optional)", "حساب لينكدإن (اختياري)"),
            MessageRequired => ("Message or Motivation *", "رسالتك أو دافعك *"),
            MessagePlaceholder => (
                "Tell us why you'd like to join Aidra...",
                "أخبرنا لماذا ترغب في الانضمام إلى أيدرا...",
            ),
            UploadResume => (
                "Upload Resume (PDF only, max 5MB) *",
                "ارفع سيرتك الذاتية (PDF فقط، بحد أقصى 5 ميجابايت) *",
            ),
            UploadFile => ("Upload a file", "ارفع ملفاً"),
            DragAndDrop => ("or drag and drop", "أو اسحبه وأفلته"),
            ResumeHint => ("PDF up to 5MB", "ملف PDF حتى 5 ميجابايت"),
            SubmitApplication => ("Submit Application", "إرسال الطلب"),
            ThankYouTitle => ("Thank you for your interest!", "شكراً لاهتمامك!"),
            ThankYouBody => (
                "Our team will review your application and get back to you shortly.",
                "سيراجع فريقنا طلبك ويعود إليك قريباً.",
            ),
            SubmitFailed => (
                "There was an error submitting your application. Please try again.",
                "حدث خطأ أثناء إرسال طلبك. يرجى المحاولة مرة أخرى.",
            ),

            ErrNameRequired => ("Please enter your name", "يرجى إدخال اسمك"),
            ErrNameLength => (
                "Name must be between 2 and 100 characters",
                "يجب أن يتراوح الاسم بين 2 و100 حرف",
            ),
            ErrNameCharacters => (
                "Name may only contain letters and spaces",
                "يجب أن يحتوي الاسم على حروف ومسافات فقط",
            ),
            ErrEmailInvalid => ("Invalid email format", "صيغة البريد الإلكتروني غير صحيحة"),
            ErrEmailTooLong => (
                "Email must be at most 100 characters",
                "يجب ألا يتجاوز البريد الإلكتروني 100 حرف",
            ),
            ErrCompanyLength => (
                "Company name must be between 2 and 100 characters",
                "يجب أن يتراوح اسم الشركة بين 2 و100 حرف",
            ),
            ErrLinkedinInvalid => (
                "Please enter a full profile URL starting with https://",
                "يرجى إدخال رابط كامل يبدأ بـ https://",
            ),
            ErrMessageRequired => ("Please tell us a little about yourself", "يرجى إخبارنا قليلاً عن نفسك"),
            ErrResumeRequired => ("Please attach your resume", "يرجى إرفاق سيرتك الذاتية"),
            ErrResumeType => ("Please upload a PDF file only", "يرجى رفع ملف PDF فقط"),
            ErrResumeSize => ("File size must be less than 5MB", "يجب أن يكون حجم الملف أقل من 5 ميجابايت"),
            Dismiss => ("Dismiss", "إخفاء"),

            FooterCompany => ("Company", "الشركة"),
            FooterResources => ("Resources", "الموارد"),
            FooterHelpCenter => ("Help Center", "مركز المساعدة"),
            FooterApiReference => ("API Reference", "مرجع الواجهة البرمجية"),
            FooterLegal => ("Legal", "الشؤون القانونية"),
            PrivacyPolicy => ("Privacy Policy", "سياسة الخصوصية"),
            TermsOfUse => ("Terms of Use", "شروط الاستخدام"),
            TermsShort => ("Terms", "الشروط"),
            FooterMobileApps => ("Mobile Apps", "تطبيقات الجوال"),
            AppStoreAria => ("Download Aidra on the App Store", "حمّل أيدرا من متجر App Store"),
            GooglePlayAria => ("Get Aidra on Google Play", "احصل على أيدرا من Google Play"),
            FooterFollow => ("Follow Us", "تابعنا"),
            InstagramAria => ("Follow us on Instagram", "تابعنا على إنستغرام"),
            LinkedinAria => ("Connect with us on LinkedIn", "تواصل معنا على لينكدإن"),
            AllRightsReserved => ("All rights reserved.", "جميع الحقوق محفوظة."),

            LastUpdated => ("Last updated", "آخر تحديث"),
            PrivacyTitle => ("Aidra – Privacy Policy", "أيدرا – سياسة الخصوصية"),
            TermsTitle => ("Terms of Use", "شروط الاستخدام"),

            LoginTitle => ("Sign in required", "تسجيل الدخول مطلوب"),
            LoginBody => (
                "This page is available to Aidra platform members. Sign in to continue.",
                "هذه الصفحة متاحة لأعضاء منصة أيدرا. سجّل الدخول للمتابعة.",
            ),
            LoginContinue => ("Continue to sign in", "المتابعة إلى تسجيل الدخول"),
            BackHome => ("Back to home", "العودة إلى الرئيسية"),
            CheckingSession => ("Checking your session…", "جارٍ التحقق من جلستك…"),
            HelpTitle => ("Help Center", "مركز المساعدة"),
            HelpBody => ("Help Center content coming soon...", "محتوى مركز المساعدة قريباً..."),
            ApiTitle => ("API Reference", "مرجع الواجهة البرمجية"),
            ApiBody => ("API Reference content coming soon...", "محتوى مرجع الواجهة البرمجية قريباً..."),
            NotFoundTitle => ("Page not found", "الصفحة غير موجودة"),
            NotFoundBody => (
                "The page you are looking for does not exist or has moved.",
                "الصفحة التي تبحث عنها غير موجودة أو تم نقلها.",
            ),
        };
        Localized::new(en, ar)
    }
}
