//! Locale metadata table.
//!
//! One entry per published language, in the order the language switcher and
//! the hreflang alternates list them. Lookups never fail: unknown codes get
//! the default locale's entry.

use serde::Serialize;

/// Locale every unknown code falls back to; also the `x-default` alternate.
pub const DEFAULT_LOCALE: &str = "zh-cn";

/// Display and SEO metadata for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    /// URL segment and table key, e.g. `zh-cn`.
    pub code: &'static str,
    /// Label in the language switcher, in the locale's own language.
    pub display_label: &'static str,
    /// Open Graph locale, e.g. `zh_CN`.
    pub og_locale: &'static str,
    pub twitter_handle: &'static str,
    /// Value of `<html lang>`.
    pub html_lang: &'static str,
    /// Value of `hreflang` on alternate links.
    pub hreflang: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Heading above the page outline.
    pub outline_label: &'static str,
    /// Top navigation bar as `(text, link)` pairs.
    pub nav: &'static [(&'static str, &'static str)],
}

impl LocaleEntry {
    /// Root path of the locale, e.g. `/zh-cn/`.
    pub fn root_path(&self) -> String {
        format!("/{}/", self.code)
    }
}

const TWITTER: &str = "@datawhale";

static LOCALES: [LocaleEntry; 10] = [
    LocaleEntry {
        code: "zh-cn",
        display_label: "简体中文",
        og_locale: "zh_CN",
        twitter_handle: TWITTER,
        html_lang: "zh-CN",
        hreflang: "zh-CN",
        title: "Easy-Vibe 教程",
        description: "从零到一学习 Vibe Coding - 零基础学会用 AI 编程，掌握 Claude Code、Cursor 等 AI IDE 工具",
        outline_label: "页面导航",
        nav: &[
            ("首页", "/zh-cn/"),
            ("零基础入门", "/zh-cn/stage-0/"),
            ("初中级开发", "/zh-cn/stage-2/"),
            ("高级开发", "/zh-cn/stage-3/"),
            ("附录", "/zh-cn/appendix/index"),
        ],
    },
    LocaleEntry {
        code: "en-us",
        display_label: "English (US)",
        og_locale: "en_US",
        twitter_handle: TWITTER,
        html_lang: "en-US",
        hreflang: "en",
        title: "Easy-Vibe Tutorial",
        description: "Learn Vibe Coding from Zero to Advanced - Master AI programming with Claude Code, Cursor, and other AI IDE tools",
        outline_label: "On this page",
        nav: &[
            ("Home", "/en-us/"),
            ("Novice & PM", "/en-us/stage-0/"),
            ("Full-Stack Development", "/en-us/stage-2/"),
            ("Advanced Development", "/en-us/stage-3/"),
            ("Appendix", "/en-us/appendix/"),
        ],
    },
    LocaleEntry {
        code: "ja-jp",
        display_label: "日本語",
        og_locale: "ja_JP",
        twitter_handle: TWITTER,
        html_lang: "ja-JP",
        hreflang: "ja",
        title: "Easy-Vibe チュートリアル",
        description: "ゼロから学ぶ Vibe Coding - AIプログラミングを初めから体系的に学習",
        outline_label: "このページの目次",
        nav: &[
            ("ホーム", "/ja-jp/"),
            ("初心者とPM", "/ja-jp/stage-0/"),
            ("フルスタック開発", "/ja-jp/stage-2/"),
            ("上級開発", "/ja-jp/stage-3/"),
            ("付録", "/ja-jp/appendix/"),
        ],
    },
    LocaleEntry {
        code: "zh-tw",
        display_label: "繁體中文",
        og_locale: "zh_TW",
        twitter_handle: TWITTER,
        html_lang: "zh-TW",
        hreflang: "zh-TW",
        title: "Easy-Vibe 教程",
        description: "從零到一學習 Vibe Coding - 零基礎學會用 AI 編程，掌握 Claude Code、Cursor 等 AI IDE 工具",
        outline_label: "頁面導航",
        nav: &[
            ("首頁", "/zh-tw/"),
            ("新手與產品原型", "/zh-tw/stage-0/"),
            ("初中級開發", "/zh-tw/stage-2/"),
            ("高級開發", "/zh-tw/stage-3/"),
            ("附錄", "/zh-tw/appendix/"),
        ],
    },
    LocaleEntry {
        code: "ko-kr",
        display_label: "한국어",
        og_locale: "ko_KR",
        twitter_handle: TWITTER,
        html_lang: "ko-KR",
        hreflang: "ko",
        title: "Easy-Vibe 튜토리얼",
        description: "Vibe Coding을 처음부터 체계적으로 학습합니다 - AI 프로그래밍을 처음부터 고급까지",
        outline_label: "페이지 탐색",
        nav: &[
            ("홈", "/ko-kr/"),
            ("초보자 & PM", "/ko-kr/stage-0/"),
            ("풀스택 개발", "/ko-kr/stage-2/"),
            ("고급 개발", "/ko-kr/stage-3/"),
            ("부록", "/ko-kr/appendix/"),
        ],
    },
    LocaleEntry {
        code: "es-es",
        display_label: "Español",
        og_locale: "es_ES",
        twitter_handle: TWITTER,
        html_lang: "es-ES",
        hreflang: "es",
        title: "Tutorial de Easy-Vibe",
        description: "Aprende Vibe Coding desde cero hasta avanzado - Domina la programación con IA desde el principio",
        outline_label: "Navegación de página",
        nav: &[
            ("Inicio", "/es-es/"),
            ("Principiante y PM", "/es-es/stage-0/"),
            ("Desarrollo Full Stack", "/es-es/stage-2/"),
            ("Desarrollo Avanzado", "/es-es/stage-3/"),
            ("Apéndice", "/es-es/appendix/"),
        ],
    },
    LocaleEntry {
        code: "fr-fr",
        display_label: "Français",
        og_locale: "fr_FR",
        twitter_handle: TWITTER,
        html_lang: "fr-FR",
        hreflang: "fr",
        title: "Tutoriel Easy-Vibe",
        description: "Apprenez Vibe Coding de zéro à avancé - Maîtrisez la programmation IA du début au niveau avancé",
        outline_label: "Navigation de page",
        nav: &[
            ("Accueil", "/fr-fr/"),
            ("Débutant & PM", "/fr-fr/stage-0/"),
            ("Développement Full Stack", "/fr-fr/stage-2/"),
            ("Développement Avancé", "/fr-fr/stage-3/"),
            ("Annexe", "/fr-fr/appendix/"),
        ],
    },
    LocaleEntry {
        code: "de-de",
        display_label: "Deutsch",
        og_locale: "de_DE",
        twitter_handle: TWITTER,
        html_lang: "de-DE",
        hreflang: "de",
        title: "Easy-Vibe Tutorial",
        description: "Lernen Sie Vibe Coding von Null bis Fortgeschritten - Meistern Sie die KI-Programmierung von Grund auf",
        outline_label: "Seitennavigation",
        nav: &[
            ("Start", "/de-de/"),
            ("Anfänger & PM", "/de-de/stage-0/"),
            ("Full Stack Entwicklung", "/de-de/stage-2/"),
            ("Fortgeschrittene Entwicklung", "/de-de/stage-3/"),
            ("Anhang", "/de-de/appendix/"),
        ],
    },
    LocaleEntry {
        code: "ar-sa",
        display_label: "العربية",
        og_locale: "ar_SA",
        twitter_handle: TWITTER,
        html_lang: "ar-SA",
        hreflang: "ar",
        title: "دروس Easy-Vibe",
        description: "تعلم Vibe Coding من الصفر إلى المتقدم - إتقان البرمجة بالذكاء الاصطناعي من البداية",
        outline_label: "تنقل الصفحة",
        nav: &[
            ("الرئيسية", "/ar-sa/"),
            ("مبتدأ & PM", "/ar-sa/stage-0/"),
            ("تطوير Full Stack", "/ar-sa/stage-2/"),
            ("تطوير متقدم", "/ar-sa/stage-3/"),
            ("ملحق", "/ar-sa/appendix/"),
        ],
    },
    LocaleEntry {
        code: "vi-vn",
        display_label: "Tiếng Việt",
        og_locale: "vi_VN",
        twitter_handle: TWITTER,
        html_lang: "vi-VN",
        hreflang: "vi",
        title: "Hướng dẫn Easy-Vibe",
        description: "Học Vibe Coding từ cơ bản đến nâng cao - Làm chủ lập trình AI từ cơ bản đến chuyên sâu",
        outline_label: "Điều hướng trang",
        nav: &[
            ("Trang chủ", "/vi-vn/"),
            ("Người mới & PM", "/vi-vn/stage-0/"),
            ("Phát triển Full Stack", "/vi-vn/stage-2/"),
            ("Phát triển Nâng cao", "/vi-vn/stage-3/"),
            ("Phụ lục", "/vi-vn/appendix/"),
        ],
    },
];

/// All locales in table order.
pub fn locales() -> &'static [LocaleEntry] {
    &LOCALES
}

/// Exact lookup by locale code.
pub fn find_locale(code: &str) -> Option<&'static LocaleEntry> {
    LOCALES.iter().find(|entry| entry.code == code)
}

/// Lookup with fallback to [`DEFAULT_LOCALE`] on a miss.
pub fn locale_meta(code: &str) -> &'static LocaleEntry {
    find_locale(code).unwrap_or_else(default_locale)
}

pub fn default_locale() -> &'static LocaleEntry {
    &LOCALES[0]
}
