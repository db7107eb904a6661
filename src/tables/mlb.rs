// ⚾ Major League Baseball, 1901 onward
//
// Canonical codes follow the era-specific franchise abbreviations; reference
// codes are the directory codes the boxscore site files games under (NYA, not
// NYY). Logo codes key the logo table below.

use super::{AliasRow, LogoRow, OverrideRow, RuleRow, TeamRow};
use crate::temporal::YearRange;

const fn between(start: i32, end: i32) -> YearRange {
    YearRange::between(start, end)
}

const fn since(start: i32) -> YearRange {
    YearRange::since(start)
}

pub const TEAMS: &[TeamRow] = &[
    ("angels", "LAA", "Los Angeles Angels", "LAA", "laa", 1961, Some(1964)),
    ("angels", "CAL", "California Angels", "CAL", "cal", 1965, Some(1996)),
    ("angels", "ANA", "Anaheim Angels", "ANA", "ana", 1997, Some(2004)),
    ("angels", "LAA", "Los Angeles Angels of Anaheim", "ANA", "laa", 2005, Some(2015)),
    ("angels", "LAA", "Los Angeles Angels", "ANA", "laa", 2016, None),
    ("astros", "HOU", "Houston Colt .45s", "HOU", "hou", 1962, Some(1964)),
    ("astros", "HOU", "Houston Astros", "HOU", "hou", 1965, None),
    ("athletics", "PHA", "Philadelphia Athletics", "PHA", "pha", 1901, Some(1954)),
    ("athletics", "KCA", "Kansas City Athletics", "KC1", "kca", 1955, Some(1967)),
    ("athletics", "OAK", "Oakland Athletics", "OAK", "oak", 1968, Some(2024)),
    ("athletics", "ATH", "Athletics", "ATH", "ath", 2025, None),
    ("blue-jays", "TOR", "Toronto Blue Jays", "TOR", "tor", 1977, None),
    ("braves", "BSN", "Boston Braves", "BSN", "bsn", 1901, Some(1952)),
    ("braves", "MLN", "Milwaukee Braves", "MLN", "mln", 1953, Some(1965)),
    ("braves", "ATL", "Atlanta Braves", "ATL", "atl", 1966, None),
    ("brewers", "SEP", "Seattle Pilots", "SE1", "sep", 1969, Some(1969)),
    ("brewers", "MIL", "Milwaukee Brewers", "MIL", "mil", 1970, None),
    ("cardinals", "STL", "St. Louis Cardinals", "SLN", "stl", 1901, None),
    ("cubs", "CHC", "Chicago Cubs", "CHN", "chc", 1901, None),
    ("diamondbacks", "ARI", "Arizona Diamondbacks", "ARI", "ari", 1998, None),
    ("dodgers", "BRO", "Brooklyn Dodgers", "BRO", "bro", 1901, Some(1957)),
    ("dodgers", "LAD", "Los Angeles Dodgers", "LAN", "lad", 1958, None),
    ("giants", "NYG", "New York Giants", "NY1", "nyg", 1901, Some(1957)),
    ("giants", "SFG", "San Francisco Giants", "SFN", "sfg", 1958, None),
    ("guardians", "CLE", "Cleveland Blues", "CLE", "cle", 1901, Some(1902)),
    ("guardians", "CLE", "Cleveland Naps", "CLE", "cle", 1903, Some(1914)),
    ("guardians", "CLE", "Cleveland Indians", "CLE", "cle", 1915, Some(2021)),
    ("guardians", "CLE", "Cleveland Guardians", "CLE", "clg", 2022, None),
    ("mariners", "SEA", "Seattle Mariners", "SEA", "sea", 1977, None),
    ("marlins", "FLA", "Florida Marlins", "FLO", "fla", 1993, Some(2011)),
    ("marlins", "MIA", "Miami Marlins", "MIA", "mia", 2012, None),
    ("mets", "NYM", "New York Mets", "NYN", "nym", 1962, None),
    ("nationals", "MON", "Montreal Expos", "MON", "mon", 1969, Some(2004)),
    ("nationals", "WSN", "Washington Nationals", "WAS", "wsn", 2005, None),
    ("orioles", "MLA", "Milwaukee Brewers", "MLA", "mla", 1901, Some(1901)),
    ("orioles", "SLB", "St. Louis Browns", "SLA", "slb", 1902, Some(1953)),
    ("orioles", "BAL", "Baltimore Orioles", "BAL", "bal", 1954, None),
    ("padres", "SDP", "San Diego Padres", "SDN", "sdp", 1969, None),
    ("phillies", "PHI", "Philadelphia Phillies", "PHI", "phi", 1901, None),
    ("pirates", "PIT", "Pittsburgh Pirates", "PIT", "pit", 1901, None),
    ("rangers", "WSA", "Washington Senators", "WS2", "wsa", 1961, Some(1971)),
    ("rangers", "TEX", "Texas Rangers", "TEX", "tex", 1972, None),
    ("rays", "TBD", "Tampa Bay Devil Rays", "TBA", "tbd", 1998, Some(2007)),
    ("rays", "TBR", "Tampa Bay Rays", "TBA", "tbr", 2008, None),
    ("red-sox", "BOS", "Boston Americans", "BOS", "bos", 1901, Some(1907)),
    ("red-sox", "BOS", "Boston Red Sox", "BOS", "bos", 1908, None),
    ("reds", "CIN", "Cincinnati Reds", "CIN", "cin", 1901, None),
    ("rockies", "COL", "Colorado Rockies", "COL", "col", 1993, None),
    ("royals", "KCR", "Kansas City Royals", "KCA", "kcr", 1969, None),
    ("tigers", "DET", "Detroit Tigers", "DET", "det", 1901, None),
    ("twins", "WSH", "Washington Senators", "WS1", "wsh", 1901, Some(1960)),
    ("twins", "MIN", "Minnesota Twins", "MIN", "min", 1961, None),
    ("white-sox", "CHW", "Chicago White Sox", "CHA", "chw", 1901, None),
    ("yankees", "BLA", "Baltimore Orioles", "BLA", "bla", 1901, Some(1902)),
    ("yankees", "NYH", "New York Highlanders", "NYA", "nyh", 1903, Some(1912)),
    ("yankees", "NYY", "New York Yankees", "NYA", "nyy", 1913, None),
];

// Names that mean different incarnations depending on the season.
// Evaluated top to bottom; the first rule covering the season wins.
pub const RULES: &[RuleRow] = &[
    ("angels-los-angeles-1961", &["Angels"], between(1961, 1964), "LAA"),
    ("angels-california", &["Angels"], between(1965, 1996), "CAL"),
    ("angels-anaheim", &["Angels"], between(1997, 2004), "ANA"),
    ("angels-los-angeles", &["Angels"], since(2005), "LAA"),
    ("marlins-florida", &["Marlins", "Miami Marlins", "Florida Marlins"], between(1993, 2011), "FLA"),
    ("marlins-miami", &["Marlins", "Miami Marlins", "Florida Marlins"], since(2012), "MIA"),
    ("nationals-senators", &["Washington Nationals", "Nationals"], between(1901, 1960), "WSH"),
    ("nationals-expos", &["Washington Nationals", "Nationals"], between(1969, 2004), "MON"),
    ("nationals", &["Washington Nationals", "Nationals"], since(2005), "WSN"),
    ("senators-original", &["Washington Senators", "Senators"], between(1901, 1960), "WSH"),
    ("senators-expansion", &["Washington Senators", "Senators"], between(1961, 1971), "WSA"),
    ("athletics-philadelphia", &["Athletics", "A's"], between(1901, 1954), "PHA"),
    ("athletics-kansas-city", &["Athletics", "A's", "KC"], between(1955, 1967), "KCA"),
    ("athletics-oakland", &["Athletics", "A's"], between(1968, 2024), "OAK"),
    ("athletics-sacramento", &["Athletics", "A's", "Oakland Athletics"], since(2025), "ATH"),
    ("royals-kansas-city", &["KC"], since(1969), "KCR"),
    ("brewers-1901", &["Brewers", "Milwaukee Brewers"], between(1901, 1901), "MLA"),
    ("brewers", &["Brewers", "Milwaukee Brewers"], since(1970), "MIL"),
    ("orioles-1901", &["Orioles", "Baltimore Orioles"], between(1901, 1902), "BLA"),
    ("orioles", &["Orioles", "Baltimore Orioles"], since(1954), "BAL"),
    ("braves-boston", &["Braves"], between(1901, 1952), "BSN"),
    ("braves-milwaukee", &["Braves"], between(1953, 1965), "MLN"),
    ("braves-atlanta", &["Braves"], since(1966), "ATL"),
    ("dodgers-brooklyn", &["Dodgers"], between(1901, 1957), "BRO"),
    ("dodgers-los-angeles", &["Dodgers"], since(1958), "LAD"),
    ("giants-new-york", &["Giants"], between(1901, 1957), "NYG"),
    ("giants-san-francisco", &["Giants"], since(1958), "SFG"),
    ("rays-devil-rays", &["Rays", "Devil Rays", "Tampa Bay Rays", "Tampa Bay Devil Rays", "TB"], between(1998, 2007), "TBD"),
    ("rays", &["Rays", "Devil Rays", "Tampa Bay Rays", "Tampa Bay Devil Rays", "TB"], since(2008), "TBR"),
    ("yankees-highlanders", &["Yankees", "New York Yankees"], between(1903, 1912), "NYH"),
];

pub const ALIASES: &[AliasRow] = &[
    ("Angels", "LAA"),
    ("Halos", "LAA"),
    ("Astros", "HOU"),
    ("Colt .45s", "HOU"),
    ("Athletics", "ATH"),
    ("A's", "ATH"),
    ("Oakland A's", "OAK"),
    ("Kansas City A's", "KCA"),
    ("Philadelphia A's", "PHA"),
    ("Blue Jays", "TOR"),
    ("Jays", "TOR"),
    ("Braves", "ATL"),
    ("Brewers", "MIL"),
    ("Pilots", "SEP"),
    ("Cardinals", "STL"),
    ("Cards", "STL"),
    ("Cubs", "CHC"),
    ("Diamondbacks", "ARI"),
    ("D-backs", "ARI"),
    ("AZ", "ARI"),
    ("Dodgers", "LAD"),
    ("Giants", "SFG"),
    ("SF", "SFG"),
    ("Guardians", "CLE"),
    ("Indians", "CLE"),
    ("Naps", "CLE"),
    ("Mariners", "SEA"),
    ("Marlins", "MIA"),
    ("Mets", "NYM"),
    ("Expos", "MON"),
    ("Nationals", "WSN"),
    ("Orioles", "BAL"),
    ("Browns", "SLB"),
    ("Padres", "SDP"),
    ("SD", "SDP"),
    ("Phillies", "PHI"),
    ("Pirates", "PIT"),
    ("Rangers", "TEX"),
    ("Rays", "TBR"),
    ("Devil Rays", "TBD"),
    ("Red Sox", "BOS"),
    ("Reds", "CIN"),
    ("Rockies", "COL"),
    ("Royals", "KCR"),
    ("Tigers", "DET"),
    ("Twins", "MIN"),
    ("Senators", "WSH"),
    ("White Sox", "CHW"),
    ("CWS", "CHW"),
    ("Yankees", "NYY"),
    ("Highlanders", "NYH"),
];

// Stats-source abbreviations the reference site spells differently
pub const OVERRIDES: &[OverrideRow] = &[
    ("CWS", since(1901), "CHA"),
    ("KC", between(1955, 1967), "KC1"),
    ("KC", since(1969), "KCA"),
    ("SD", since(1969), "SDN"),
    ("SF", since(1958), "SFN"),
    ("TB", since(1998), "TBA"),
    ("AZ", since(1998), "ARI"),
    ("WSH", since(2005), "WAS"),
];

pub const LOGOS: &[LogoRow] = &[
    ("laa", between(1961, 1964), "laa_1961"),
    ("laa", between(2005, 2015), "laa_2005"),
    ("laa", since(2016), "laa_2016"),
    ("cal", between(1965, 1992), "cal_1965"),
    ("cal", between(1993, 1996), "cal_1993"),
    ("ana", between(1997, 2001), "ana_1997"),
    ("ana", between(2002, 2004), "ana_2002"),
    ("hou", between(1962, 1964), "hou_1962"),
    ("hou", between(1965, 1993), "hou_1965"),
    ("hou", between(1994, 2012), "hou_1994"),
    ("hou", since(2013), "hou_2013"),
    ("pha", between(1901, 1954), "pha_1901"),
    ("kca", between(1955, 1967), "kca_1955"),
    ("oak", between(1968, 1992), "oak_1968"),
    ("oak", between(1993, 2024), "oak_1993"),
    ("ath", since(2025), "ath_2025"),
    ("tor", between(1977, 1996), "tor_1977"),
    ("tor", between(1997, 2011), "tor_1997"),
    ("tor", since(2012), "tor_2012"),
    ("bsn", between(1901, 1952), "bsn_1901"),
    ("mln", between(1953, 1965), "mln_1953"),
    ("atl", between(1966, 1986), "atl_1966"),
    ("atl", since(1987), "atl_1987"),
    ("sep", between(1969, 1969), "sep_1969"),
    ("mil", between(1970, 1977), "mil_1970"),
    ("mil", between(1978, 1999), "mil_1978"),
    ("mil", between(2000, 2019), "mil_2000"),
    ("mil", since(2020), "mil_2020"),
    ("stl", between(1901, 1997), "stl_1901"),
    ("stl", since(1998), "stl_1998"),
    ("chc", between(1901, 1978), "chc_1901"),
    ("chc", since(1979), "chc_1979"),
    ("ari", between(1998, 2006), "ari_1998"),
    ("ari", since(2007), "ari_2007"),
    ("bro", between(1901, 1957), "bro_1901"),
    ("lad", since(1958), "lad_1958"),
    ("nyg", between(1901, 1957), "nyg_1901"),
    ("sfg", between(1958, 1999), "sfg_1958"),
    ("sfg", since(2000), "sfg_2000"),
    ("cle", between(1901, 1914), "cle_1901"),
    ("cle", between(1915, 1985), "cle_1915"),
    ("cle", between(1986, 2021), "cle_1986"),
    ("clg", since(2022), "clg_2022"),
    ("sea", between(1977, 1986), "sea_1977"),
    ("sea", between(1987, 1992), "sea_1987"),
    ("sea", since(1993), "sea_1993"),
    ("fla", between(1993, 2011), "fla_1993"),
    ("mia", between(2012, 2018), "mia_2012"),
    ("mia", since(2019), "mia_2019"),
    ("nym", since(1962), "nym_1962"),
    ("mon", between(1969, 1991), "mon_1969"),
    ("mon", between(1992, 2004), "mon_1992"),
    ("wsn", between(2005, 2010), "wsn_2005"),
    ("wsn", since(2011), "wsn_2011"),
    ("mla", between(1901, 1901), "mla_1901"),
    ("slb", between(1902, 1953), "slb_1902"),
    ("bal", between(1954, 1988), "bal_1954"),
    ("bal", between(1989, 2008), "bal_1989"),
    ("bal", since(2009), "bal_2009"),
    ("sdp", between(1969, 1984), "sdp_1969"),
    ("sdp", between(1985, 2003), "sdp_1985"),
    ("sdp", between(2004, 2019), "sdp_2004"),
    ("sdp", since(2020), "sdp_2020"),
    ("phi", between(1901, 1991), "phi_1901"),
    ("phi", between(1992, 2018), "phi_1992"),
    ("phi", since(2019), "phi_2019"),
    ("pit", between(1901, 1986), "pit_1901"),
    ("pit", between(1987, 2013), "pit_1987"),
    ("pit", since(2014), "pit_2014"),
    ("wsa", between(1961, 1971), "wsa_1961"),
    ("tex", between(1972, 1993), "tex_1972"),
    ("tex", between(1994, 2023), "tex_1994"),
    ("tex", since(2024), "tex_2024"),
    ("tbd", between(1998, 2007), "tbd_1998"),
    ("tbr", between(2008, 2018), "tbr_2008"),
    ("tbr", since(2019), "tbr_2019"),
    ("bos", between(1901, 2008), "bos_1901"),
    ("bos", since(2009), "bos_2009"),
    ("cin", between(1901, 1967), "cin_1901"),
    ("cin", between(1968, 1992), "cin_1968"),
    ("cin", between(1993, 2012), "cin_1993"),
    ("cin", since(2013), "cin_2013"),
    ("col", between(1993, 2016), "col_1993"),
    ("col", since(2017), "col_2017"),
    ("kcr", between(1969, 1985), "kcr_1969"),
    ("kcr", between(1986, 2001), "kcr_1986"),
    ("kcr", since(2002), "kcr_2002"),
    ("det", between(1901, 1993), "det_1901"),
    ("det", between(1994, 2015), "det_1994"),
    ("det", since(2016), "det_2016"),
    ("wsh", between(1901, 1960), "wsh_1901"),
    ("min", between(1961, 1986), "min_1961"),
    ("min", between(1987, 2009), "min_1987"),
    ("min", since(2010), "min_2010"),
    ("chw", between(1901, 1990), "chw_1901"),
    ("chw", since(1991), "chw_1991"),
    ("bla", between(1901, 1902), "bla_1901"),
    ("nyh", between(1903, 1912), "nyh_1903"),
    ("nyy", between(1913, 1946), "nyy_1913"),
    ("nyy", since(1947), "nyy_1947"),
];
