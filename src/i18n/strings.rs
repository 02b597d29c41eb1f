/// Fixed, per-locale strings the content layer hands to the renderer.
///
/// Page copy lives in the content store; these are the few strings the site
/// must be able to show even when a page's own content is missing or only
/// partially translated.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    /// Notice shown when a page is served from the fallback locale
    pub fallback_notice: &'static str,

    /// Label for the language switcher entry of this locale
    pub language_label: &'static str,
}

// ==================== English Strings ====================

/// English strings (fallback locale)
pub const EN_GB_STRINGS: LocaleStrings = LocaleStrings {
    fallback_notice: "This page is not yet available in your language, so we are showing the English version.",
    language_label: "English",
};

// ==================== Chinese Strings ====================

/// Traditional Chinese strings
pub const ZH_TW_STRINGS: LocaleStrings = LocaleStrings {
    fallback_notice: "此頁面的中文版本尚未完成，目前顯示英文版本。",
    language_label: "繁體中文",
};

/// Simplified Chinese strings
pub const ZH_CN_STRINGS: LocaleStrings = LocaleStrings {
    fallback_notice: "此页面的中文版本尚未完成，目前显示英文版本。",
    language_label: "简体中文",
};

// ==================== European Strings ====================

/// French strings
pub const FR_FR_STRINGS: LocaleStrings = LocaleStrings {
    fallback_notice: "Cette page n'est pas encore traduite en français ; la version anglaise est affichée.",
    language_label: "Français",
};

/// Spanish strings
pub const ES_ES_STRINGS: LocaleStrings = LocaleStrings {
    fallback_notice: "Esta página aún no está traducida al español; se muestra la versión en inglés.",
    language_label: "Español",
};

impl LocaleStrings {
    /// Get the strings for a canonical locale tag.
    ///
    /// Unknown tags get the fallback locale's strings.
    pub fn for_tag(tag: &str) -> &'static LocaleStrings {
        match tag {
            "zh-TW" => &ZH_TW_STRINGS,
            "zh-CN" => &ZH_CN_STRINGS,
            "fr-FR" => &FR_FR_STRINGS,
            "es-ES" => &ES_ES_STRINGS,
            _ => &EN_GB_STRINGS,
        }
    }
}
