//! Metadata for the tables bundled with the translation engine.

use crate::environment::LocaleProvider;
use crate::error::Result;
use crate::registry::TableRegistry;
use crate::table::TableDescriptor;

struct BuiltinTable {
    file_name: &'static str,
    display_name: &'static str,
    contracted: bool,
    output: bool,
    input: bool,
}

const fn table(file_name: &'static str, display_name: &'static str) -> BuiltinTable {
    BuiltinTable {
        file_name,
        display_name,
        contracted: false,
        output: true,
        input: true,
    }
}

const fn contracted(file_name: &'static str, display_name: &'static str) -> BuiltinTable {
    BuiltinTable {
        file_name,
        display_name,
        contracted: true,
        output: true,
        input: true,
    }
}

const fn input_only(file_name: &'static str, display_name: &'static str) -> BuiltinTable {
    BuiltinTable {
        file_name,
        display_name,
        contracted: false,
        output: false,
        input: true,
    }
}

/// Tables shipped with the bundled translation engine. Display names are
/// English; they go through the locale provider's translation lookup when
/// registered.
const BUILTIN_TABLES: &[BuiltinTable] = &[
    table("afr-za-g1.ctb", "Afrikaans grade 1"),
    table("ar-ar-comp8.utb", "Arabic 8 dot computer braille"),
    table("ar-ar-g1.utb", "Arabic grade 1"),
    table("ar-ar-g2.ctb", "Arabic grade 2"),
    table("as-in-g1.utb", "Assamese grade 1"),
    table("be-in-g1.utb", "Bengali grade 1"),
    table("bg.ctb", "Bulgarian 8 dot computer braille"),
    table("ckb-g1.ctb", "Central Kurdish grade 1"),
    table("cy-cy-g1.utb", "Welsh grade 1"),
    contracted("cy-cy-g2.ctb", "Welsh grade 2"),
    table("cs-comp8.utb", "Czech 8 dot computer braille"),
    table("cs-g1.ctb", "Czech grade 1"),
    table("da-dk-g08.ctb", "Danish 8 dot computer braille"),
    table("da-dk-g16.ctb", "Danish 6 dot grade 1"),
    table("da-dk-g18.ctb", "Danish 8 dot grade 1"),
    contracted("da-dk-g26.ctb", "Danish 6 dot grade 2"),
    contracted("da-dk-g28.ctb", "Danish 8 dot grade 2"),
    table("de-de-comp8.ctb", "German 8 dot computer braille"),
    table("de-g0.utb", "German grade 0"),
    table("de-g1.ctb", "German grade 1"),
    contracted("de-g2.ctb", "German grade 2"),
    table("el.ctb", "Greek (Greece)"),
    table("en-gb-comp8.ctb", "English (U.K.) 8 dot computer braille"),
    table("en-gb-g1.utb", "English (U.K.) grade 1"),
    contracted("en-GB-g2.ctb", "English (U.K.) grade 2"),
    table("en-nabcc.utb", "English North American Braille Computer Code"),
    table("en-ueb-g1.ctb", "Unified English Braille Code grade 1"),
    contracted("en-ueb-g2.ctb", "Unified English Braille Code grade 2"),
    table("en-us-comp6.ctb", "English (U.S.) 6 dot computer braille"),
    table("en-us-comp8-ext.utb", "English (U.S.) 8 dot computer braille"),
    table("en-us-g1.ctb", "English (U.S.) grade 1"),
    contracted("en-us-g2.ctb", "English (U.S.) grade 2"),
    table("eo-g1.ctb", "Esperanto grade 1"),
    table("Es-Es-G0.utb", "Spanish 8 dot computer braille"),
    table("es-g1.ctb", "Spanish grade 1"),
    table("es-g2.ctb", "Spanish grade 2"),
    table("et-g0.utb", "Estonian grade 0"),
    table("ethio-g1.ctb", "Ethiopic grade 1"),
    table("fa-ir-comp8.ctb", "Persian 8 dot computer braille"),
    table("fa-ir-g1.utb", "Persian grade 1"),
    table("fi.utb", "Finnish 6 dot"),
    table("fi-fi-8dot.ctb", "Finnish 8 dot computer braille"),
    table("fr-bfu-comp6.utb", "French (unified) 6 dot computer braille"),
    table("fr-bfu-comp8.utb", "French (unified) 8 dot computer braille"),
    contracted("fr-bfu-g2.ctb", "French (unified) grade 2"),
    table("ga-g1.utb", "Irish grade 1"),
    contracted("ga-g2.ctb", "Irish grade 2"),
    table("gu-in-g1.utb", "Gujarati grade 1"),
    table("grc-international-en.utb", "Greek international braille"),
    table("he.ctb", "Hebrew 8 dot computer braille"),
    table("hi-in-g1.utb", "Hindi grade 1"),
    table("hr-comp8.utb", "Croatian 8 dot computer braille"),
    table("hr-g1.ctb", "Croatian grade 1"),
    table("hu-hu-comp8.ctb", "Hungarian 8 dot computer braille"),
    table("hu-hu-g1.ctb", "Hungarian grade 1"),
    contracted("hu-hu-g2.ctb", "Hungarian grade 2"),
    table("is.ctb", "Icelandic 8 dot computer braille"),
    table("it-it-comp6.utb", "Italian 6 dot computer braille"),
    table("it-it-comp8.utb", "Italian 8 dot computer braille"),
    table("ka-in-g1.utb", "Kannada grade 1"),
    table("ko-2006-g1.ctb", "Korean grade 1 (2006)"),
    contracted("ko-2006-g2.ctb", "Korean grade 2 (2006)"),
    table("ko-g1.ctb", "Korean grade 1"),
    contracted("ko-g2.ctb", "Korean grade 2"),
    table("ks-in-g1.utb", "Kashmiri grade 1"),
    table("lt.ctb", "Lithuanian 8 dot"),
    table("lt-6dot.utb", "Lithuanian 6 dot"),
    table("Lv-Lv-g1.utb", "Latvian grade 1"),
    table("ml-in-g1.utb", "Malayalam grade 1"),
    table("mn-in-g1.utb", "Manipuri grade 1"),
    table("mn-MN-g1.utb", "Mongolian grade 1"),
    contracted("mn-MN-g2.ctb", "Mongolian grade 2"),
    table("mr-in-g1.utb", "Marathi grade 1"),
    table("nl-BE-g0.utb", "Dutch (Belgium) 6 dot"),
    table("nl-NL-g0.utb", "Dutch (Netherlands) 6 dot"),
    table("nl-comp8.utb", "Dutch 8 dot"),
    table("no-no-8dot.utb", "Norwegian 8 dot computer braille"),
    table("No-No-g0.utb", "Norwegian grade 0"),
    table("No-No-g1.ctb", "Norwegian grade 1"),
    contracted("No-No-g2.ctb", "Norwegian grade 2"),
    contracted("No-No-g3.ctb", "Norwegian grade 3"),
    table("np-in-g1.utb", "Nepali grade 1"),
    table("or-in-g1.utb", "Oriya grade 1"),
    table("pl-pl-comp8.ctb", "Polish 8 dot computer braille"),
    table("Pl-Pl-g1.utb", "Polish grade 1"),
    table("pt-pt-comp8.ctb", "Portuguese 8 dot computer braille"),
    table("Pt-Pt-g1.utb", "Portuguese grade 1"),
    contracted("Pt-Pt-g2.ctb", "Portuguese grade 2"),
    table("pu-in-g1.utb", "Punjabi grade 1"),
    table("ro.ctb", "Romanian"),
    table("ru.ctb", "Russian computer braille"),
    table("ru-ru-g1.utb", "Russian grade 1"),
    table("sa-in-g1.utb", "Sanskrit grade 1"),
    table("Se-Se.ctb", "Swedish 8 dot computer braille"),
    table("Se-Se-g1.utb", "Swedish grade 1"),
    table("sk-g1.ctb", "Slovak grade 1"),
    table("sl-si-comp8.ctb", "Slovenian 8 dot computer braille"),
    table("sl-si-g1.utb", "Slovenian grade 1"),
    table("sr-g1.ctb", "Serbian grade 1"),
    table("ta-ta-g1.ctb", "Tamil grade 1"),
    table("te-in-g1.utb", "Telugu grade 1"),
    table("tr.ctb", "Turkish grade 1"),
    table("uk.utb", "Ukrainian"),
    input_only("unicode-braille.utb", "Unicode braille"),
    table("vi-g1.ctb", "Vietnamese grade 1"),
    table("zhcn-g1.ctb", "Chinese (China, Mandarin) grade 1"),
    table("zhcn-g2.ctb", "Chinese (China, Mandarin) grade 2"),
    table("zh-hk.ctb", "Chinese (Hong Kong, Cantonese)"),
    table("zh-tw.ctb", "Chinese (Taiwan, Mandarin)"),
];

/// Register every bundled table, localizing display names through `locale`.
pub fn register_builtin_tables(
    registry: &mut TableRegistry,
    locale: &dyn LocaleProvider,
) -> Result<()> {
    for entry in BUILTIN_TABLES {
        registry.register(TableDescriptor::new(
            entry.file_name,
            locale.translate(entry.display_name),
            entry.contracted,
            entry.output,
            entry.input,
        )?)?;
    }
    Ok(())
}
