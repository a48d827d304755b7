// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-rendered string tables, one per [`Language`].
//!
//! Every table has the same [`Translations`] type, so a missing key is a
//! compile error rather than a runtime lookup failure: [`resolve`] is total
//! over the supported languages and never partially resolves.

use crate::language::Language;

/// Number of leaf strings in every [`Translations`] table.
pub const ENTRY_COUNT: usize = 71;

/// The complete set of user-visible strings for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    /// Header and navigation panel labels.
    pub nav: NavStrings,
    /// Hero banner.
    pub hero: HeroStrings,
    /// History section.
    pub history: HistoryStrings,
    /// Schedule section.
    pub schedule: ScheduleStrings,
    /// Services section.
    pub services: ServicesStrings,
    /// Location section.
    pub location: LocationStrings,
    /// Donation section.
    pub donate: DonateStrings,
    /// Footer.
    pub footer: FooterStrings,
}

/// Header and navigation panel labels.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct NavStrings {
    pub home: &'static str,
    pub history: &'static str,
    pub schedule: &'static str,
    pub contact: &'static str,
    pub donate: &'static str,
    pub menu: &'static str,
    pub change_language: &'static str,
    pub current_language: &'static str,
    pub close_menu: &'static str,
    pub make_donation: &'static str,
}

/// Hero banner strings.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct HeroStrings {
    pub welcome: &'static str,
    pub parish_name: &'static str,
    pub subtitle: &'static str,
    pub donate_button: &'static str,
    pub schedule_button: &'static str,
}

/// History section strings.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct HistoryStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub origins: MilestoneStrings,
    pub present: MilestoneStrings,
    pub future: MilestoneStrings,
}

/// One card of the history timeline.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct MilestoneStrings {
    pub title: &'static str,
    pub description: &'static str,
}

/// Schedule section strings.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct ScheduleStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub masses: MassesStrings,
    pub confessions: ConfessionsStrings,
    pub office: OfficeStrings,
    pub calendar_link: &'static str,
}

/// Mass times card.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct MassesStrings {
    pub title: &'static str,
    pub sundays_label: &'static str,
    pub sundays_time: &'static str,
}

/// Confession times card.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct ConfessionsStrings {
    pub title: &'static str,
    pub daily_label: &'static str,
    pub daily_time: &'static str,
    pub thursday_label: &'static str,
    pub thursday_time: &'static str,
}

/// Church office hours card.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct OfficeStrings {
    pub title: &'static str,
    pub schedule_label: &'static str,
    pub schedule_time: &'static str,
    pub urgent_label: &'static str,
    pub urgent_time: &'static str,
}

/// Services section strings.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct ServicesStrings {
    pub title: &'static str,
    pub baptisms: ServiceStrings,
    pub catechesis: ServiceStrings,
    pub marriages: ServiceStrings,
    pub choir: ServiceStrings,
    pub caritas: ServiceStrings,
    pub youth_group: ServiceStrings,
}

/// One service card.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct ServiceStrings {
    pub title: &'static str,
    pub description: &'static str,
}

/// Location section strings.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct LocationStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
    pub hours_detail: &'static str,
}

/// Donation section strings.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct DonateStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub bank_transfer: &'static str,
    pub account_number: &'static str,
    pub concept: &'static str,
    pub thanks_message: &'static str,
}

/// Footer strings.
#[derive(Debug, PartialEq, Eq)]
#[expect(missing_docs, reason = "field names are the translation keys")]
pub struct FooterStrings {
    pub about: &'static str,
    pub about_text: &'static str,
    pub quick_links: &'static str,
    pub contact: &'static str,
    pub rights: &'static str,
}

impl Translations {
    /// The services in display order.
    #[must_use]
    pub fn service_cards(&self) -> [&ServiceStrings; 6] {
        let s = &self.services;
        [
            &s.baptisms,
            &s.catechesis,
            &s.marriages,
            &s.choir,
            &s.caritas,
            &s.youth_group,
        ]
    }

    /// The history timeline in display order.
    #[must_use]
    pub fn milestones(&self) -> [&MilestoneStrings; 3] {
        [&self.history.origins, &self.history.present, &self.history.future]
    }

    /// Every `(key, value)` pair, in declaration order.
    ///
    /// Keys use the dotted camel-case paths of the site's string schema
    /// (`"nav.changeLanguage"`, `"schedule.masses.sundaysTime"`).
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &'static str); ENTRY_COUNT] {
        [
            ("nav.home", self.nav.home),
            ("nav.history", self.nav.history),
            ("nav.schedule", self.nav.schedule),
            ("nav.contact", self.nav.contact),
            ("nav.donate", self.nav.donate),
            ("nav.menu", self.nav.menu),
            ("nav.changeLanguage", self.nav.change_language),
            ("nav.currentLanguage", self.nav.current_language),
            ("nav.closeMenu", self.nav.close_menu),
            ("nav.makeDonation", self.nav.make_donation),
            ("hero.welcome", self.hero.welcome),
            ("hero.parishName", self.hero.parish_name),
            ("hero.subtitle", self.hero.subtitle),
            ("hero.donateButton", self.hero.donate_button),
            ("hero.scheduleButton", self.hero.schedule_button),
            ("history.title", self.history.title),
            ("history.subtitle", self.history.subtitle),
            ("history.origins.title", self.history.origins.title),
            ("history.origins.description", self.history.origins.description),
            ("history.present.title", self.history.present.title),
            ("history.present.description", self.history.present.description),
            ("history.future.title", self.history.future.title),
            ("history.future.description", self.history.future.description),
            ("schedule.title", self.schedule.title),
            ("schedule.subtitle", self.schedule.subtitle),
            ("schedule.masses.title", self.schedule.masses.title),
            ("schedule.masses.sundaysLabel", self.schedule.masses.sundays_label),
            ("schedule.masses.sundaysTime", self.schedule.masses.sundays_time),
            ("schedule.confessions.title", self.schedule.confessions.title),
            ("schedule.confessions.dailyLabel", self.schedule.confessions.daily_label),
            ("schedule.confessions.dailyTime", self.schedule.confessions.daily_time),
            ("schedule.confessions.thursdayLabel", self.schedule.confessions.thursday_label),
            ("schedule.confessions.thursdayTime", self.schedule.confessions.thursday_time),
            ("schedule.office.title", self.schedule.office.title),
            ("schedule.office.scheduleLabel", self.schedule.office.schedule_label),
            ("schedule.office.scheduleTime", self.schedule.office.schedule_time),
            ("schedule.office.urgentLabel", self.schedule.office.urgent_label),
            ("schedule.office.urgentTime", self.schedule.office.urgent_time),
            ("schedule.calendarLink", self.schedule.calendar_link),
            ("services.title", self.services.title),
            ("services.baptisms.title", self.services.baptisms.title),
            ("services.baptisms.description", self.services.baptisms.description),
            ("services.catechesis.title", self.services.catechesis.title),
            ("services.catechesis.description", self.services.catechesis.description),
            ("services.marriages.title", self.services.marriages.title),
            ("services.marriages.description", self.services.marriages.description),
            ("services.choir.title", self.services.choir.title),
            ("services.choir.description", self.services.choir.description),
            ("services.caritas.title", self.services.caritas.title),
            ("services.caritas.description", self.services.caritas.description),
            ("services.youthGroup.title", self.services.youth_group.title),
            ("services.youthGroup.description", self.services.youth_group.description),
            ("location.title", self.location.title),
            ("location.subtitle", self.location.subtitle),
            ("location.address", self.location.address),
            ("location.phone", self.location.phone),
            ("location.email", self.location.email),
            ("location.hours", self.location.hours),
            ("location.hoursDetail", self.location.hours_detail),
            ("donate.title", self.donate.title),
            ("donate.subtitle", self.donate.subtitle),
            ("donate.description", self.donate.description),
            ("donate.bankTransfer", self.donate.bank_transfer),
            ("donate.accountNumber", self.donate.account_number),
            ("donate.concept", self.donate.concept),
            ("donate.thanksMessage", self.donate.thanks_message),
            ("footer.about", self.footer.about),
            ("footer.aboutText", self.footer.about_text),
            ("footer.quickLinks", self.footer.quick_links),
            ("footer.contact", self.footer.contact),
            ("footer.rights", self.footer.rights),
        ]
    }

    /// Looks up a string by its dotted key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }
}

/// Returns the complete string table for `language`.
#[must_use]
pub fn resolve(language: Language) -> &'static Translations {
    match language {
        Language::Es => &SPANISH,
        Language::Gl => &GALICIAN,
        Language::En => &ENGLISH,
    }
}

/// Accessible label for the language toggle, e.g.
/// `"Change language. Current language: EN"`.
#[must_use]
pub fn language_toggle_label(language: Language) -> alloc::string::String {
    let nav = &resolve(language).nav;
    alloc::format!(
        "{}. {}: {}",
        nav.change_language,
        nav.current_language,
        language.code()
    )
}

/// Accessible label for the menu button in the given panel state.
#[must_use]
pub fn menu_toggle_label(language: Language, panel_open: bool) -> &'static str {
    let nav = &resolve(language).nav;
    if panel_open { nav.close_menu } else { nav.menu }
}

static SPANISH: Translations = Translations {
    nav: NavStrings {
        home: "Inicio",
        history: "Historia",
        schedule: "Horarios",
        contact: "Contacto",
        donate: "Donar",
        menu: "Menú",
        change_language: "Cambiar idioma",
        current_language: "Idioma actual",
        close_menu: "Cerrar menú",
        make_donation: "Hacer un Donativo",
    },
    hero: HeroStrings {
        welcome: "Bienvenidos a casa",
        parish_name: "Santa Rita",
        subtitle: "Misas, Sacramentos y vida comunitaria en O Barco de Valdeorras.",
        donate_button: "Haz una Donación",
        schedule_button: "Ver Horarios",
    },
    history: HistoryStrings {
        title: "Nuestra Historia",
        subtitle: "Desde 1980 compartiendo fe y vida",
        origins: MilestoneStrings {
            title: "Orígenes",
            description: "Una comunidad de fe formada por familias y vecinos que, a lo largo de los años, han encontrado en este templo un lugar de encuentro, oración y servicio.",
        },
        present: MilestoneStrings {
            title: "Presente",
            description: "Día a día celebramos la vida comunitaria a través de la liturgia, la acogida y el acompañamiento espiritual a quienes nos visitan.",
        },
        future: MilestoneStrings {
            title: "Futuro",
            description: "Miramos adelante con el compromiso de seguir siendo un espacio abierto donde todos encuentren acogida, paz y sentido de comunidad.",
        },
    },
    schedule: ScheduleStrings {
        title: "Horarios y Apertura",
        subtitle: "Nuestras puertas están siempre abiertas para recibirte. Consulta los horarios de nuestras celebraciones y atención pastoral.",
        masses: MassesStrings {
            title: "Santas Misas",
            sundays_label: "Domingos y Festivos",
            sundays_time: "12:30 y 19:00",
        },
        confessions: ConfessionsStrings {
            title: "Confesiones",
            daily_label: "Diario",
            daily_time: "30 min antes de cada misa",
            thursday_label: "Jueves Eucarístico",
            thursday_time: "18:30 - 19:30",
        },
        office: OfficeStrings {
            title: "Oficina de la Iglesia",
            schedule_label: "Martes y Jueves",
            schedule_time: "17:00 - 19:00",
            urgent_label: "Atención Urgente",
            urgent_time: "Cita previa por teléfono",
        },
        calendar_link: "Ver calendario litúrgico completo",
    },
    services: ServicesStrings {
        title: "Vida de la Iglesia",
        baptisms: ServiceStrings {
            title: "Bautismos",
            description: "El inicio de la vida cristiana.",
        },
        catechesis: ServiceStrings {
            title: "Catequesis",
            description: "Formación para niños y adultos.",
        },
        marriages: ServiceStrings {
            title: "Matrimonios",
            description: "Unión sagrada ante Dios.",
        },
        choir: ServiceStrings {
            title: "Coro",
            description: "Alabanza a través de la música.",
        },
        caritas: ServiceStrings {
            title: "Cáritas",
            description: "Ayuda a los más necesitados.",
        },
        youth_group: ServiceStrings {
            title: "Grupo Joven",
            description: "Comunidad y actividades juveniles.",
        },
    },
    location: LocationStrings {
        title: "Encuéntranos",
        subtitle: "Estamos aquí para ti",
        address: "Dirección",
        phone: "Teléfono",
        email: "Email",
        hours: "Horario de Atención",
        hours_detail: "Lunes a Viernes: 10:00 - 13:00 y 17:00 - 19:00",
    },
    donate: DonateStrings {
        title: "Apoya Nuestra Misión",
        subtitle: "Tu generosidad hace posible nuestro trabajo",
        description: "Tus donaciones nos ayudan a mantener nuestra iglesia, realizar obras de caridad y continuar sirviendo a nuestra comunidad. Cada contribución, grande o pequeña, marca una diferencia.",
        bank_transfer: "Transferencia Bancaria",
        account_number: "Número de Cuenta",
        concept: "Concepto: Donativo Iglesia Santa Rita",
        thanks_message: "¡Gracias por tu generosidad!",
    },
    footer: FooterStrings {
        about: "Sobre Nosotros",
        about_text: "La Iglesia Santa Rita es una comunidad de fe católica dedicada a servir a las familias de O Barco de Valdeorras.",
        quick_links: "Enlaces Rápidos",
        contact: "Contacto",
        rights: "Todos los derechos reservados.",
    },
};

static GALICIAN: Translations = Translations {
    nav: NavStrings {
        home: "Inicio",
        history: "Historia",
        schedule: "Horarios",
        contact: "Contacto",
        donate: "Doar",
        menu: "Menú",
        change_language: "Cambiar idioma",
        current_language: "Idioma actual",
        close_menu: "Pechar menú",
        make_donation: "Facer un Donativo",
    },
    hero: HeroStrings {
        welcome: "Benvidos á casa",
        parish_name: "Santa Rita",
        subtitle: "Misas, Sacramentos e vida comunitaria no Barco de Valdeorras.",
        donate_button: "Fai unha Doazón",
        schedule_button: "Ver Horarios",
    },
    history: HistoryStrings {
        title: "A Nosa Historia",
        subtitle: "Desde 1980 compartindo fe e vida",
        origins: MilestoneStrings {
            title: "Orixes",
            description: "Unha comunidade de fe formada por familias e veciños que, ao longo dos anos, atoparon neste templo un lugar de encontro, oración e servizo.",
        },
        present: MilestoneStrings {
            title: "Presente",
            description: "Día a día celebramos a vida comunitaria a través da liturxia, a acollida e o acompañamento espiritual a quen nos visita.",
        },
        future: MilestoneStrings {
            title: "Futuro",
            description: "Miramos adiante co compromiso de seguir sendo un espazo aberto onde todos atopen acollida, paz e sentido de comunidade.",
        },
    },
    schedule: ScheduleStrings {
        title: "Horarios e Apertura",
        subtitle: "As nosas portas están sempre abertas para recibirte",
        masses: MassesStrings {
            title: "Santas Misas",
            sundays_label: "Domingos e Festivos",
            sundays_time: "12:30 e 19:00",
        },
        confessions: ConfessionsStrings {
            title: "Confesións",
            daily_label: "Diario",
            daily_time: "30 min antes de cada misa",
            thursday_label: "Xoves Eucarístico",
            thursday_time: "18:30 - 19:30",
        },
        office: OfficeStrings {
            title: "Oficina da Igrexa",
            schedule_label: "Martes e Xoves",
            schedule_time: "17:00 - 19:00",
            urgent_label: "Atención Urxente",
            urgent_time: "Cita previa por teléfono",
        },
        calendar_link: "Ver calendario litúrxico completo",
    },
    services: ServicesStrings {
        title: "Vida da Igrexa",
        baptisms: ServiceStrings {
            title: "Bautismos",
            description: "O inicio da vida cristiá.",
        },
        catechesis: ServiceStrings {
            title: "Catequese",
            description: "Formación para nenos e adultos.",
        },
        marriages: ServiceStrings {
            title: "Matrimonios",
            description: "Unión sagrada ante Deus.",
        },
        choir: ServiceStrings {
            title: "Coro",
            description: "Eloxio a través da música.",
        },
        caritas: ServiceStrings {
            title: "Cáritas",
            description: "Axuda aos máis necesitados.",
        },
        youth_group: ServiceStrings {
            title: "Grupo Xove",
            description: "Comunidade e actividades xuvenís.",
        },
    },
    location: LocationStrings {
        title: "Atópanos",
        subtitle: "Estamos aquí para ti",
        address: "Enderezo",
        phone: "Teléfono",
        email: "Email",
        hours: "Horario de Atención",
        hours_detail: "Luns a Venres: 10:00 - 13:00 e 17:00 - 19:00",
    },
    donate: DonateStrings {
        title: "Apoia a Nosa Misión",
        subtitle: "A túa xenerosidade fai posible o noso traballo",
        description: "As túas doazóns axúdannos a manter a nosa igrexa, realizar obras de caridade e continuar servindo á nosa comunidade. Cada contribución, grande ou pequena, marca unha diferenza.",
        bank_transfer: "Transferencia Bancaria",
        account_number: "Número de Conta",
        concept: "Concepto: Donativo Igrexa Santa Rita",
        thanks_message: "Grazas pola túa xenerosidade!",
    },
    footer: FooterStrings {
        about: "Sobre Nós",
        about_text: "A Igrexa Santa Rita é unha comunidade de fe católica dedicada a servir ás familias de O Barco de Valdeorras.",
        quick_links: "Ligazóns Rápidas",
        contact: "Contacto",
        rights: "Todos os dereitos reservados.",
    },
};

static ENGLISH: Translations = Translations {
    nav: NavStrings {
        home: "Home",
        history: "History",
        schedule: "Schedule",
        contact: "Contact",
        donate: "Donate",
        menu: "Menu",
        change_language: "Change language",
        current_language: "Current language",
        close_menu: "Close menu",
        make_donation: "Make a Donation",
    },
    hero: HeroStrings {
        welcome: "Welcome home",
        parish_name: "Santa Rita",
        subtitle: "Masses, Sacraments, and community life in O Barco de Valdeorras.",
        donate_button: "Make a Donation",
        schedule_button: "View Schedule",
    },
    history: HistoryStrings {
        title: "Our History",
        subtitle: "Since 1980 sharing faith and life",
        origins: MilestoneStrings {
            title: "Origins",
            description: "A community of faith formed by families and neighbors who, over the years, have found in this temple a place of gathering, prayer, and service.",
        },
        present: MilestoneStrings {
            title: "Present",
            description: "Every day we celebrate community life through liturgy, welcome, and spiritual accompaniment for those who visit us.",
        },
        future: MilestoneStrings {
            title: "Future",
            description: "We look ahead with the commitment to remain an open space where everyone finds welcome, peace, and a sense of community.",
        },
    },
    schedule: ScheduleStrings {
        title: "Schedule & Opening Hours",
        subtitle: "Our doors are always open to welcome you",
        masses: MassesStrings {
            title: "Holy Masses",
            sundays_label: "Sundays & Holidays",
            sundays_time: "12:30 & 19:00",
        },
        confessions: ConfessionsStrings {
            title: "Confessions",
            daily_label: "Daily",
            daily_time: "30 min before each mass",
            thursday_label: "Eucharistic Thursday",
            thursday_time: "6:30 PM - 7:30 PM",
        },
        office: OfficeStrings {
            title: "Church Office",
            schedule_label: "Tuesdays & Thursdays",
            schedule_time: "5:00 PM - 7:00 PM",
            urgent_label: "Urgent Care",
            urgent_time: "By appointment",
        },
        calendar_link: "View full liturgical calendar",
    },
    services: ServicesStrings {
        title: "Church Life",
        baptisms: ServiceStrings {
            title: "Baptisms",
            description: "The beginning of Christian life.",
        },
        catechesis: ServiceStrings {
            title: "Catechesis",
            description: "Formation for children and adults.",
        },
        marriages: ServiceStrings {
            title: "Marriages",
            description: "Sacred union before God.",
        },
        choir: ServiceStrings {
            title: "Choir",
            description: "Praise through music.",
        },
        caritas: ServiceStrings {
            title: "Caritas",
            description: "Help for those in need.",
        },
        youth_group: ServiceStrings {
            title: "Youth Group",
            description: "Community and youth activities.",
        },
    },
    location: LocationStrings {
        title: "Find Us",
        subtitle: "We are here for you",
        address: "Address",
        phone: "Phone",
        email: "Email",
        hours: "Office Hours",
        hours_detail: "Monday to Friday: 10:00 AM - 1:00 PM and 5:00 PM - 7:00 PM",
    },
    donate: DonateStrings {
        title: "Support Our Mission",
        subtitle: "Your generosity makes our work possible",
        description: "Your donations help us maintain our church, carry out charitable works and continue serving our community. Every contribution, large or small, makes a difference.",
        bank_transfer: "Bank Transfer",
        account_number: "Account Number",
        concept: "Concept: Donation Church Santa Rita",
        thanks_message: "Thank you for your generosity!",
    },
    footer: FooterStrings {
        about: "About Us",
        about_text: "The Church of Santa Rita is a Catholic faith community dedicated to serving the families of O Barco de Valdeorras.",
        quick_links: "Quick Links",
        contact: "Contact",
        rights: "All rights reserved.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_to_non_empty_text() {
        for lang in Language::ALL {
            for (key, value) in resolve(lang).entries() {
                assert!(!value.trim().is_empty(), "{lang}: `{key}` is empty");
            }
        }
    }

    #[test]
    fn keys_are_identical_and_unique_across_languages() {
        let reference = resolve(Language::Es).entries().map(|(k, _)| k);
        for (i, key) in reference.iter().enumerate() {
            assert!(
                !reference[..i].contains(key),
                "duplicate key `{key}`"
            );
        }
        for lang in Language::ALL {
            assert_eq!(resolve(lang).entries().map(|(k, _)| k), reference);
        }
    }

    #[test]
    fn tables_are_distinct() {
        assert_ne!(resolve(Language::Es), resolve(Language::En));
        assert_eq!(resolve(Language::Gl).nav.donate, "Doar");
        assert_eq!(resolve(Language::En).nav.home, "Home");
    }

    #[test]
    fn get_by_key() {
        let en = resolve(Language::En);
        assert_eq!(en.get("schedule.masses.sundaysTime"), Some("12:30 & 19:00"));
        assert_eq!(en.get("nav.nope"), None);
    }

    #[test]
    fn derived_labels() {
        assert_eq!(
            language_toggle_label(Language::En),
            "Change language. Current language: EN"
        );
        assert_eq!(menu_toggle_label(Language::Es, true), "Cerrar menú");
        assert_eq!(menu_toggle_label(Language::Gl, false), "Menú");
    }
}
