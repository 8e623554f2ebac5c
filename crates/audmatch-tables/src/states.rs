//! State and province tables keyed by country code.
//!
//! Keys are matched as whole words before diacritic folding runs, so
//! names callers commonly type with accents appear in both spellings.

use audmatch_model::{word_map, CountryTableMap, WordMap};

/// State tables for every country that ships builtin data.
pub fn states() -> CountryTableMap {
    [
        ("us", united_states()),
        ("ca", canada()),
        ("gb", united_kingdom()),
        ("de", germany()),
        ("au", australia()),
        ("mx", mexico()),
    ]
    .into_iter()
    .map(|(code, table)| (code.to_string(), table))
    .collect()
}

// 50 states plus dc
fn united_states() -> WordMap {
    word_map(&[
        ("alabama", "al"),
        ("alaska", "ak"),
        ("arizona", "az"),
        ("arkansas", "ar"),
        ("california", "ca"),
        ("colorado", "co"),
        ("connecticut", "ct"),
        ("delaware", "de"),
        ("district of columbia", "dc"),
        ("florida", "fl"),
        ("georgia", "ga"),
        ("hawaii", "hi"),
        ("idaho", "id"),
        ("illinois", "il"),
        ("indiana", "in"),
        ("iowa", "ia"),
        ("kansas", "ks"),
        ("kentucky", "ky"),
        ("louisiana", "la"),
        ("maine", "me"),
        ("maryland", "md"),
        ("massachusetts", "ma"),
        ("michigan", "mi"),
        ("minnesota", "mn"),
        ("mississippi", "ms"),
        ("missouri", "mo"),
        ("montana", "mt"),
        ("nebraska", "ne"),
        ("nevada", "nv"),
        ("new hampshire", "nh"),
        ("new jersey", "nj"),
        ("new mexico", "nm"),
        ("new york", "ny"),
        ("north carolina", "nc"),
        ("north dakota", "nd"),
        ("ohio", "oh"),
        ("oklahoma", "ok"),
        ("oregon", "or"),
        ("pennsylvania", "pa"),
        ("rhode island", "ri"),
        ("south carolina", "sc"),
        ("south dakota", "sd"),
        ("tennessee", "tn"),
        ("texas", "tx"),
        ("utah", "ut"),
        ("vermont", "vt"),
        ("virginia", "va"),
        ("washington", "wa"),
        ("west virginia", "wv"),
        ("wisconsin", "wi"),
        ("wyoming", "wy"),
    ])
}

fn canada() -> WordMap {
    word_map(&[
        ("alberta", "ab"),
        ("british columbia", "bc"),
        ("manitoba", "mb"),
        ("new brunswick", "nb"),
        ("newfoundland and labrador", "nl"),
        ("northwest territories", "nt"),
        ("nova scotia", "ns"),
        ("nunavut", "nu"),
        ("ontario", "on"),
        ("prince edward island", "pe"),
        ("quebec", "qc"),
        ("québec", "qc"),
        ("saskatchewan", "sk"),
        ("yukon", "yt"),
    ])
}

fn united_kingdom() -> WordMap {
    word_map(&[
        ("england", "eng"),
        ("northern ireland", "nir"),
        ("scotland", "sct"),
        ("wales", "wls"),
    ])
}

fn germany() -> WordMap {
    word_map(&[
        ("baden-württemberg", "bw"),
        ("baden-wuerttemberg", "bw"),
        ("bayern", "by"),
        ("bavaria", "by"),
        ("berlin", "be"),
        ("brandenburg", "bb"),
        ("bremen", "hb"),
        ("hamburg", "hh"),
        ("hessen", "he"),
        ("hesse", "he"),
        ("mecklenburg-vorpommern", "mv"),
        ("niedersachsen", "ni"),
        ("lower saxony", "ni"),
        ("nordrhein-westfalen", "nw"),
        ("north rhine-westphalia", "nw"),
        ("rheinland-pfalz", "rp"),
        ("rhineland-palatinate", "rp"),
        ("saarland", "sl"),
        ("sachsen", "sn"),
        ("saxony", "sn"),
        ("sachsen-anhalt", "st"),
        ("saxony-anhalt", "st"),
        ("schleswig-holstein", "sh"),
        ("thüringen", "th"),
        ("thueringen", "th"),
        ("thuringia", "th"),
    ])
}

fn australia() -> WordMap {
    word_map(&[
        ("australian capital territory", "act"),
        ("new south wales", "nsw"),
        ("northern territory", "nt"),
        ("queensland", "qld"),
        ("south australia", "sa"),
        ("tasmania", "tas"),
        ("victoria", "vic"),
        ("western australia", "wa"),
    ])
}

fn mexico() -> WordMap {
    word_map(&[
        ("aguascalientes", "agu"),
        ("baja california", "bcn"),
        ("baja california sur", "bcs"),
        ("campeche", "cam"),
        ("chiapas", "chp"),
        ("chihuahua", "chh"),
        ("ciudad de méxico", "cmx"),
        ("ciudad de mexico", "cmx"),
        ("coahuila", "coa"),
        ("colima", "col"),
        ("durango", "dur"),
        ("estado de méxico", "mex"),
        ("estado de mexico", "mex"),
        ("guanajuato", "gua"),
        ("guerrero", "gro"),
        ("hidalgo", "hid"),
        ("jalisco", "jal"),
        ("michoacán", "mic"),
        ("michoacan", "mic"),
        ("morelos", "mor"),
        ("nayarit", "nay"),
        ("nuevo león", "nle"),
        ("nuevo leon", "nle"),
        ("oaxaca", "oax"),
        ("puebla", "pue"),
        ("querétaro", "que"),
        ("queretaro", "que"),
        ("quintana roo", "roo"),
        ("san luis potosí", "slp"),
        ("san luis potosi", "slp"),
        ("sinaloa", "sin"),
        ("sonora", "son"),
        ("tabasco", "tab"),
        ("tamaulipas", "tam"),
        ("tlaxcala", "tla"),
        ("veracruz", "ver"),
        ("yucatán", "yuc"),
        ("yucatan", "yuc"),
        ("zacatecas", "zac"),
    ])
}
