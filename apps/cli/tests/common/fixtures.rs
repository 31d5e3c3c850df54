//! Entry page fixtures shaped like ldoceonline.com markup.

/// Wrap entries in a page with a title and ad scripts.
pub fn entry_page(headword: &str, entries: &[String]) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n<title>{hw} | meaning</title>\n",
            "<script type=\"text/javascript\">\nvar googletag = googletag || {{}};\n</script>\n",
            "</head>\n<body>\n<div class=\"entry_content\">\n",
            "<h1 class=\"pagetitle\">{hw}</h1>\n",
            "{entries}\n",
            "<script>\nwindow.adsbygoogle = [];\n</script>\n",
            "</div>\n</body>\n</html>\n",
        ),
        hw = headword,
        entries = entries.join("\n"),
    )
}

/// An LDOCE entry with pronunciation audio, frequency, POS and grammar.
pub fn ldoce_entry(audio_url: &str, pos: &str, senses: &[(&str, &str)]) -> String {
    let senses: String = senses
        .iter()
        .enumerate()
        .map(|(i, (def, example))| {
            format!(
                concat!(
                    "<span class=\"Sense\" id=\"sense{n}\">\n",
                    "\t<span class=\"sensenum span\">{n}</span>\n",
                    "\t<span class=\"DEF\">{def}</span>\n",
                    "\t<span class=\"EXAMPLE\">",
                    "<span class=\"speaker exafile\" data-src-mp3=\"{audio}exaProns/p008-00{n}.mp3\"></span>",
                    "{example}</span>\n",
                    "</span>",
                ),
                n = i + 1,
                def = def,
                example = example,
                audio = audio_url,
            )
        })
        .collect();

    format!(
        concat!(
            "<span class=\"dictentry\">",
            "<span class=\"dictionary_intro span\">From Longman Dictionary of Contemporary English</span>\n",
            "<span class=\"Head\">",
            "<span class=\"tooltip LEVEL\"> ●●● </span>",
            "<span class=\"PronCodes\"><span class=\"PRON\">rʌn</span>",
            "<span class=\"AMEVARPRON\"> $ rʌn</span></span>",
            "<span class=\"speaker brefile\" data-src-mp3=\"{audio}breProns/brelasde0101.mp3\"></span>",
            "<span class=\"POS\"> {pos} </span>",
            "<span class=\"GRAM\">[intransitive]</span>",
            "</span>\n",
            "{senses}\n",
            "</span>",
        ),
        audio = audio_url,
        pos = pos,
        senses = senses,
    )
}

/// An entry from the business dictionary, which must be skipped.
pub fn business_entry() -> String {
    concat!(
        "<span class=\"dictentry\">",
        "<span class=\"dictionary_intro span\">From Longman Business Dictionary</span>",
        "<span class=\"Sense\"><span class=\"DEF\">to operate a business</span></span>",
        "</span>",
    )
    .to_string()
}

