// 🏀 National Basketball Association, 1976-77 onward
//
// Seasons are named by the year they end in. Canonical codes double as the
// boxscore site's codes, so reference codes here match; the override table
// covers the stats-source spellings (BKN, PHX, GS, ...).

use super::{AliasRow, LogoRow, OverrideRow, RuleRow, TeamRow};
use crate::temporal::YearRange;

const fn between(start: i32, end: i32) -> YearRange {
    YearRange::between(start, end)
}

const fn since(start: i32) -> YearRange {
    YearRange::since(start)
}

pub const TEAMS: &[TeamRow] = &[
    ("hawks", "ATL", "Atlanta Hawks", "ATL", "atl", 1977, None),
    ("celtics", "BOS", "Boston Celtics", "BOS", "bos", 1977, None),
    ("nets", "NYN", "New York Nets", "NYN", "nyn", 1977, Some(1977)),
    ("nets", "NJN", "New Jersey Nets", "NJN", "njn", 1978, Some(2012)),
    ("nets", "BRK", "Brooklyn Nets", "BRK", "bkn", 2013, None),
    ("clippers", "BUF", "Buffalo Braves", "BUF", "buf", 1977, Some(1978)),
    ("clippers", "SDC", "San Diego Clippers", "SDC", "sdc", 1979, Some(1984)),
    ("clippers", "LAC", "Los Angeles Clippers", "LAC", "lac", 1985, None),
    ("bulls", "CHI", "Chicago Bulls", "CHI", "chi", 1977, None),
    ("cavaliers", "CLE", "Cleveland Cavaliers", "CLE", "cle", 1977, None),
    ("mavericks", "DAL", "Dallas Mavericks", "DAL", "dal", 1981, None),
    ("nuggets", "DEN", "Denver Nuggets", "DEN", "den", 1977, None),
    ("pistons", "DET", "Detroit Pistons", "DET", "det", 1977, None),
    ("warriors", "GSW", "Golden State Warriors", "GSW", "gsw", 1977, None),
    ("rockets", "HOU", "Houston Rockets", "HOU", "hou", 1977, None),
    ("pacers", "IND", "Indiana Pacers", "IND", "ind", 1977, None),
    ("kings", "KCK", "Kansas City Kings", "KCK", "kck", 1977, Some(1985)),
    ("kings", "SAC", "Sacramento Kings", "SAC", "sac", 1986, None),
    ("lakers", "LAL", "Los Angeles Lakers", "LAL", "lal", 1977, None),
    ("heat", "MIA", "Miami Heat", "MIA", "mia", 1989, None),
    ("bucks", "MIL", "Milwaukee Bucks", "MIL", "mil", 1977, None),
    ("timberwolves", "MIN", "Minnesota Timberwolves", "MIN", "min", 1990, None),
    ("jazz", "NOJ", "New Orleans Jazz", "NOJ", "noj", 1977, Some(1979)),
    ("jazz", "UTA", "Utah Jazz", "UTA", "uta", 1980, None),
    ("knicks", "NYK", "New York Knicks", "NYK", "nyk", 1977, None),
    ("magic", "ORL", "Orlando Magic", "ORL", "orl", 1990, None),
    ("76ers", "PHI", "Philadelphia 76ers", "PHI", "phi", 1977, None),
    ("suns", "PHO", "Phoenix Suns", "PHO", "phx", 1977, None),
    ("trail-blazers", "POR", "Portland Trail Blazers", "POR", "por", 1977, None),
    ("spurs", "SAS", "San Antonio Spurs", "SAS", "sas", 1977, None),
    ("thunder", "SEA", "Seattle SuperSonics", "SEA", "sea", 1977, Some(2008)),
    ("thunder", "OKC", "Oklahoma City Thunder", "OKC", "okc", 2009, None),
    ("raptors", "TOR", "Toronto Raptors", "TOR", "tor", 1996, None),
    ("grizzlies", "VAN", "Vancouver Grizzlies", "VAN", "van", 1996, Some(2001)),
    ("grizzlies", "MEM", "Memphis Grizzlies", "MEM", "mem", 2002, None),
    ("wizards", "WSB", "Washington Bullets", "WSB", "wsb", 1977, Some(1997)),
    ("wizards", "WAS", "Washington Wizards", "WAS", "was", 1998, None),
    ("pelicans", "CHH", "Charlotte Hornets", "CHH", "chh", 1989, Some(2002)),
    ("pelicans", "NOH", "New Orleans Hornets", "NOH", "noh", 2003, Some(2005)),
    ("pelicans", "NOK", "New Orleans/Oklahoma City Hornets", "NOK", "nok", 2006, Some(2007)),
    ("pelicans", "NOH", "New Orleans Hornets", "NOH", "noh", 2008, Some(2013)),
    ("pelicans", "NOP", "New Orleans Pelicans", "NOP", "nop", 2014, None),
    ("hornets", "CHA", "Charlotte Bobcats", "CHA", "cha", 2005, Some(2014)),
    ("hornets", "CHO", "Charlotte Hornets", "CHO", "cho", 2015, None),
];

pub const RULES: &[RuleRow] = &[
    ("nets-new-york", &["Nets"], between(1977, 1977), "NYN"),
    ("nets-new-jersey", &["Nets"], between(1978, 2012), "NJN"),
    ("nets-brooklyn", &["Nets"], since(2013), "BRK"),
    ("clippers-san-diego", &["Clippers"], between(1979, 1984), "SDC"),
    ("clippers-los-angeles", &["Clippers"], since(1985), "LAC"),
    ("kings-kansas-city", &["Kings"], between(1977, 1985), "KCK"),
    ("kings-sacramento", &["Kings"], since(1986), "SAC"),
    ("jazz-new-orleans", &["Jazz"], between(1977, 1979), "NOJ"),
    ("jazz-utah", &["Jazz"], since(1980), "UTA"),
    ("grizzlies-vancouver", &["Grizzlies"], between(1996, 2001), "VAN"),
    ("grizzlies-memphis", &["Grizzlies"], since(2002), "MEM"),
    ("hornets-charlotte-original", &["Hornets", "Charlotte Hornets"], between(1989, 2002), "CHH"),
    ("hornets-new-orleans", &["Hornets", "New Orleans Hornets", "NO"], between(2003, 2005), "NOH"),
    (
        "hornets-oklahoma-city",
        &["Hornets", "New Orleans Hornets", "New Orleans/Oklahoma City Hornets", "NO"],
        between(2006, 2007),
        "NOK",
    ),
    ("hornets-new-orleans-return", &["Hornets", "New Orleans Hornets", "NO"], between(2008, 2013), "NOH"),
    ("hornets-charlotte", &["Hornets", "Charlotte Hornets"], since(2015), "CHO"),
];

pub const ALIASES: &[AliasRow] = &[
    ("Hawks", "ATL"),
    ("Celtics", "BOS"),
    ("Nets", "BRK"),
    ("BKN", "BRK"),
    ("Braves", "BUF"),
    ("Clippers", "LAC"),
    ("Bulls", "CHI"),
    ("Cavaliers", "CLE"),
    ("Cavs", "CLE"),
    ("Mavericks", "DAL"),
    ("Mavs", "DAL"),
    ("Nuggets", "DEN"),
    ("Pistons", "DET"),
    ("Warriors", "GSW"),
    ("GS", "GSW"),
    ("Rockets", "HOU"),
    ("Pacers", "IND"),
    ("Kings", "SAC"),
    ("Lakers", "LAL"),
    ("Heat", "MIA"),
    ("Bucks", "MIL"),
    ("Timberwolves", "MIN"),
    ("Wolves", "MIN"),
    ("Jazz", "UTA"),
    ("UTAH", "UTA"),
    ("Knicks", "NYK"),
    ("NY", "NYK"),
    ("Magic", "ORL"),
    ("76ers", "PHI"),
    ("Sixers", "PHI"),
    ("Suns", "PHO"),
    ("PHX", "PHO"),
    ("Trail Blazers", "POR"),
    ("Blazers", "POR"),
    ("Spurs", "SAS"),
    ("SA", "SAS"),
    ("SuperSonics", "SEA"),
    ("Sonics", "SEA"),
    ("Thunder", "OKC"),
    ("Raptors", "TOR"),
    ("Grizzlies", "MEM"),
    ("Bullets", "WSB"),
    ("Wizards", "WAS"),
    ("WSH", "WAS"),
    ("Hornets", "CHO"),
    ("Bobcats", "CHA"),
    ("Pelicans", "NOP"),
    ("NO", "NOP"),
];

pub const OVERRIDES: &[OverrideRow] = &[
    ("BKN", since(2013), "BRK"),
    ("CHA", since(2015), "CHO"),
    ("PHX", since(1977), "PHO"),
    ("GS", since(1977), "GSW"),
    ("SA", since(1977), "SAS"),
    ("NY", since(1977), "NYK"),
    ("NO", since(2014), "NOP"),
    ("UTAH", since(1980), "UTA"),
    ("WSH", since(1998), "WAS"),
];

pub const LOGOS: &[LogoRow] = &[
    ("atl", between(1977, 1994), "atl_1977"),
    ("atl", between(1995, 2014), "atl_1995"),
    ("atl", since(2015), "atl_2015"),
    ("bos", since(1977), "bos_1977"),
    ("nyn", between(1977, 1977), "nyn_1977"),
    ("njn", between(1978, 1997), "njn_1978"),
    ("njn", between(1998, 2012), "njn_1998"),
    ("bkn", since(2013), "bkn_2013"),
    ("buf", between(1977, 1978), "buf_1977"),
    ("sdc", between(1979, 1984), "sdc_1979"),
    ("lac", between(1985, 2015), "lac_1985"),
    ("lac", since(2016), "lac_2016"),
    ("chi", since(1977), "chi_1977"),
    ("cle", between(1977, 1994), "cle_1977"),
    ("cle", between(1995, 2003), "cle_1995"),
    ("cle", between(2004, 2017), "cle_2004"),
    ("cle", since(2018), "cle_2018"),
    ("dal", between(1981, 2001), "dal_1981"),
    ("dal", since(2002), "dal_2002"),
    ("den", between(1977, 1993), "den_1977"),
    ("den", between(1994, 2008), "den_1994"),
    ("den", since(2009), "den_2009"),
    ("det", between(1977, 1996), "det_1977"),
    ("det", between(1997, 2005), "det_1997"),
    ("det", between(2006, 2017), "det_2006"),
    ("det", since(2018), "det_2018"),
    ("gsw", between(1977, 1997), "gsw_1977"),
    ("gsw", between(1998, 2010), "gsw_1998"),
    ("gsw", since(2011), "gsw_2011"),
    ("hou", between(1977, 1995), "hou_1977"),
    ("hou", between(1996, 2003), "hou_1996"),
    ("hou", since(2004), "hou_2004"),
    ("ind", between(1977, 1990), "ind_1977"),
    ("ind", between(1991, 2005), "ind_1991"),
    ("ind", between(2006, 2017), "ind_2006"),
    ("ind", since(2018), "ind_2018"),
    ("kck", between(1977, 1985), "kck_1977"),
    ("sac", between(1986, 1994), "sac_1986"),
    ("sac", between(1995, 2016), "sac_1995"),
    ("sac", since(2017), "sac_2017"),
    ("lal", since(1977), "lal_1977"),
    ("mia", since(1989), "mia_1989"),
    ("mil", between(1977, 1993), "mil_1977"),
    ("mil", between(1994, 2006), "mil_1994"),
    ("mil", between(2007, 2015), "mil_2007"),
    ("mil", since(2016), "mil_2016"),
    ("min", between(1990, 1996), "min_1990"),
    ("min", between(1997, 2008), "min_1997"),
    ("min", between(2009, 2017), "min_2009"),
    ("min", since(2018), "min_2018"),
    ("noj", between(1977, 1979), "noj_1977"),
    ("uta", between(1980, 1996), "uta_1980"),
    ("uta", between(1997, 2010), "uta_1997"),
    ("uta", between(2011, 2016), "uta_2011"),
    ("uta", since(2017), "uta_2017"),
    ("nyk", between(1977, 1992), "nyk_1977"),
    ("nyk", between(1993, 2011), "nyk_1993"),
    ("nyk", since(2012), "nyk_2012"),
    ("orl", between(1990, 2000), "orl_1990"),
    ("orl", between(2001, 2010), "orl_2001"),
    ("orl", since(2011), "orl_2011"),
    ("phi", between(1977, 1997), "phi_1977"),
    ("phi", between(1998, 2009), "phi_1998"),
    ("phi", since(2010), "phi_2010"),
    ("phx", between(1977, 1992), "phx_1977"),
    ("phx", between(1993, 2000), "phx_1993"),
    ("phx", since(2001), "phx_2001"),
    ("por", between(1977, 2002), "por_1977"),
    ("por", between(2003, 2017), "por_2003"),
    ("por", since(2018), "por_2018"),
    ("sas", between(1977, 2002), "sas_1977"),
    ("sas", between(2003, 2017), "sas_2003"),
    ("sas", since(2018), "sas_2018"),
    ("sea", between(1977, 1995), "sea_1977"),
    ("sea", between(1996, 2008), "sea_1996"),
    ("okc", since(2009), "okc_2009"),
    ("tor", between(1996, 2008), "tor_1996"),
    ("tor", between(2009, 2015), "tor_2009"),
    ("tor", since(2016), "tor_2016"),
    ("van", between(1996, 2001), "van_1996"),
    ("mem", between(2002, 2018), "mem_2002"),
    ("mem", since(2019), "mem_2019"),
    ("wsb", between(1977, 1997), "wsb_1977"),
    ("was", between(1998, 2011), "was_1998"),
    ("was", since(2012), "was_2012"),
    ("chh", between(1989, 2002), "chh_1989"),
    ("noh", between(2003, 2013), "noh_2003"),
    ("nok", between(2006, 2007), "nok_2006"),
    ("nop", since(2014), "nop_2014"),
    ("cha", between(2005, 2014), "cha_2005"),
    ("cho", since(2015), "cho_2015"),
];
