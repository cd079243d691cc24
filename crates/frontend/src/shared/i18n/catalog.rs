//! Static string table. Each row is `(key, english, arabic)`.

use contracts::enums::Locale;

const ENTRIES: &[(&str, &str, &str)] = &[
    // Brand and navigation
    ("brand.name", "FacilityPro", "فاسيليتي برو"),
    ("brand.tagline", "Integrated facilities management", "إدارة متكاملة للمرافق"),
    ("nav.home", "Home", "الرئيسية"),
    ("nav.services", "Services", "خدماتنا"),
    ("nav.contact", "Contact", "تواصل معنا"),
    ("nav.menu", "Menu", "القائمة"),
    ("lang.switch", "Switch language", "تغيير اللغة"),
    // Hero carousel
    ("hero.slide1.title", "Spaces that simply work", "مساحات تعمل بكل سلاسة"),
    ("hero.slide1.subtitle", "Cleaning, maintenance and security under one contract.", "التنظيف والصيانة والأمن ضمن عقد واحد."),
    ("hero.slide2.title", "Around-the-clock maintenance", "صيانة على مدار الساعة"),
    ("hero.slide2.subtitle", "Certified technicians on call every hour of every day.", "فنيون معتمدون متاحون في كل ساعة من كل يوم."),
    ("hero.slide3.title", "Safe, green, compliant", "آمن وصديق للبيئة وملتزم"),
    ("hero.slide3.subtitle", "Sustainable practices that meet every local regulation.", "ممارسات مستدامة تلبي جميع الأنظمة المحلية."),
    ("hero.cta.services", "Explore services", "استكشف خدماتنا"),
    ("hero.cta.contact", "Get a quote", "اطلب عرض سعر"),
    ("hero.prev", "Previous slide", "الشريحة السابقة"),
    ("hero.next", "Next slide", "الشريحة التالية"),
    // About
    ("about.title", "About us", "من نحن"),
    ("about.body", "For over fifteen years we have kept offices, towers and residential communities running smoothly.", "منذ أكثر من خمسة عشر عامًا نحافظ على سير المكاتب والأبراج والمجمعات السكنية بسلاسة."),
    ("about.point1", "Single point of contact", "جهة تواصل واحدة"),
    ("about.point2", "Transparent monthly reporting", "تقارير شهرية شفافة"),
    ("about.point3", "Trained and vetted staff", "فريق مدرب وموثوق"),
    // Services
    ("services.title", "Our services", "خدماتنا"),
    ("services.subtitle", "Everything your building needs, delivered by one team.", "كل ما يحتاجه مبناك، يقدمه فريق واحد."),
    ("services.request_quote", "Request a quote", "اطلب عرض سعر"),
    ("services.view_all", "View all services", "عرض جميع الخدمات"),
    ("service.cleaning.title", "Cleaning", "التنظيف"),
    ("service.cleaning.summary", "Daily, deep and specialist cleaning for every type of space.", "تنظيف يومي وعميق ومتخصص لجميع أنواع المساحات."),
    ("service.maintenance.title", "Maintenance", "الصيانة"),
    ("service.maintenance.summary", "Planned and reactive maintenance for electrical, plumbing and civil works.", "صيانة مخططة وطارئة للأعمال الكهربائية والسباكة والأعمال المدنية."),
    ("service.security.title", "Security", "الأمن"),
    ("service.security.summary", "Licensed guards, access control and CCTV monitoring.", "حراس مرخصون وأنظمة تحكم بالدخول ومراقبة بالكاميرات."),
    ("service.landscaping.title", "Landscaping", "تنسيق الحدائق"),
    ("service.landscaping.summary", "Design and upkeep of gardens, irrigation and green roofs.", "تصميم وصيانة الحدائق وأنظمة الري والأسطح الخضراء."),
    ("service.pest_control.title", "Pest control", "مكافحة الآفات"),
    ("service.pest_control.summary", "Safe, certified treatments and preventive inspections.", "معالجات آمنة ومعتمدة وفحوصات وقائية."),
    ("service.hvac.title", "HVAC", "التكييف والتهوية"),
    ("service.hvac.summary", "Installation, servicing and energy tuning of cooling systems.", "تركيب وصيانة أنظمة التبريد وتحسين استهلاك الطاقة."),
    // Stats
    ("stats.title", "In numbers", "بالأرقام"),
    ("stats.buildings", "Buildings managed", "مبنى تحت إدارتنا"),
    ("stats.clients", "Happy clients", "عميل راضٍ"),
    ("stats.staff", "Team members", "موظف"),
    ("stats.years", "Years of experience", "سنوات من الخبرة"),
    // Testimonials
    ("testimonials.title", "What our clients say", "ماذا يقول عملاؤنا"),
    ("testimonial1.quote", "Response times dropped by half in the first quarter.", "انخفضت أوقات الاستجابة إلى النصف في الربع الأول."),
    ("testimonial1.author", "Operations Director, retail group", "مدير العمليات، مجموعة تجزئة"),
    ("testimonial2.quote", "One team for everything made our lives much easier.", "فريق واحد لكل شيء جعل حياتنا أسهل بكثير."),
    ("testimonial2.author", "Community Manager, residential towers", "مدير المجتمع، أبراج سكنية"),
    ("testimonial3.quote", "Their reporting is the clearest we have ever received.", "تقاريرهم هي الأوضح التي تلقيناها على الإطلاق."),
    ("testimonial3.author", "Facilities Lead, technology campus", "مسؤول المرافق، مجمع تقني"),
    // Call to action
    ("cta.title", "Ready to talk?", "هل أنت مستعد للحديث؟"),
    ("cta.body", "Tell us about your building and we will prepare a tailored proposal.", "أخبرنا عن مبناك وسنعد لك عرضًا مصممًا خصيصًا."),
    ("cta.button", "Contact us", "تواصل معنا"),
    // Contact
    ("contact.title", "Contact us", "تواصل معنا"),
    ("contact.subtitle", "We reply within one business day.", "نرد خلال يوم عمل واحد."),
    ("contact.name", "Full name", "الاسم الكامل"),
    ("contact.email", "Email", "البريد الإلكتروني"),
    ("contact.phone", "Phone (optional)", "الهاتف (اختياري)"),
    ("contact.service", "Service", "الخدمة"),
    ("contact.service.any", "Not sure yet", "لم أحدد بعد"),
    ("contact.message", "How can we help?", "كيف يمكننا مساعدتك؟"),
    ("contact.submit", "Send message", "إرسال الرسالة"),
    ("contact.sent", "Your email client has been opened with your message.", "تم فتح برنامج البريد مع رسالتك."),
    ("contact.reach", "Reach us directly", "تواصل معنا مباشرة"),
    ("contact.error.name", "Please enter your name.", "يرجى إدخال اسمك."),
    ("contact.error.email_missing", "Please enter your email.", "يرجى إدخال بريدك الإلكتروني."),
    ("contact.error.email_invalid", "This email address does not look right.", "يبدو أن عنوان البريد الإلكتروني غير صحيح."),
    ("contact.error.phone", "Phone numbers may only contain digits, spaces and + - ( ).", "يجب أن يحتوي رقم الهاتف على أرقام ومسافات و + - ( ) فقط."),
    ("contact.error.message_short", "Please write at least a few words.", "يرجى كتابة بضع كلمات على الأقل."),
    ("contact.error.message_long", "Your message is too long.", "رسالتك طويلة جدًا."),
    // Footer and misc
    ("footer.rights", "All rights reserved.", "جميع الحقوق محفوظة."),
    ("footer.links", "Quick links", "روابط سريعة"),
    ("page.back_home", "Back to home", "العودة إلى الرئيسية"),
];

/// Translate `key`; falls back to English, then to the key itself.
pub fn translate(locale: Locale, key: &'static str) -> &'static str {
    let Some((_, en, ar)) = ENTRIES.iter().copied().find(|(k, _, _)| *k == key) else {
        log::warn!("missing translation key '{key}'");
        return key;
    };
    match locale {
        Locale::Ar if !ar.is_empty() => ar,
        _ => en,
    }
}

/// Every key in the table.
pub fn keys() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(k, _, _)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{ServiceKind, ViewId};
    use contracts::shared::contact::ContactFormError;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for key in keys() {
            assert!(seen.insert(key), "duplicate key {key}");
        }
    }

    #[test]
    fn every_entry_has_both_languages() {
        for (key, en, ar) in ENTRIES {
            assert!(!en.is_empty(), "{key} has no English");
            assert!(!ar.is_empty(), "{key} has no Arabic");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate(Locale::Ar, "nope.nothing"), "nope.nothing");
    }

    #[test]
    fn lookup_picks_the_requested_language() {
        assert_eq!(translate(Locale::En, "nav.home"), "Home");
        assert_eq!(translate(Locale::Ar, "nav.home"), "الرئيسية");
    }

    #[test]
    fn shared_vocabulary_is_fully_translated() {
        let known: HashSet<_> = keys().collect();
        let mut needed: Vec<&str> = ViewId::all().iter().map(|v| v.label_key()).collect();
        for kind in ServiceKind::all() {
            needed.push(kind.title_key());
            needed.push(kind.summary_key());
        }
        for err in [
            ContactFormError::MissingName,
            ContactFormError::MissingEmail,
            ContactFormError::InvalidEmail,
            ContactFormError::InvalidPhone,
            ContactFormError::MessageTooShort { min: 1 },
            ContactFormError::MessageTooLong { max: 1 },
        ] {
            needed.push(err.message_key());
        }
        for key in needed {
            assert!(known.contains(key), "missing key {key}");
        }
    }
}
