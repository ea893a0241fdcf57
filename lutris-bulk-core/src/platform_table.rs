//! Built-in platform table.
//!
//! Defaults prefer libretro where a core exists, picking the most actively
//! maintained core. Standalone runners are the default where libretro has no
//! combined option (VICE, for example) or where the platform is served by a
//! dedicated runner such as ScummVM.

use crate::registry::PlatformEntry;

/// Extensions scanned when the user does not pass `--file-types`.
pub const DEFAULT_ROM_FILE_EXTS: &[&str] = &[
    "iso", "zip", "sfc", "gba", "gbc", "gb", "md", "n64", "nes", "32x", "gg", "sms", "bin", "chd",
];

pub(crate) static PLATFORM_TABLE: &[PlatformEntry] = &[
    PlatformEntry {
        name: "3DO",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["opera"]),
        default_core: Some("opera"),
    },
    PlatformEntry {
        name: "Amstrad CPC",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["cap32", "crocods"]),
        default_core: Some("cap32"),
    },
    PlatformEntry {
        name: "Amstrad GX4000",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["cap32"]),
        default_core: Some("cap32"),
    },
    PlatformEntry {
        name: "Arcade",
        runners: &["mame", "libretro"],
        default_runner: "libretro",
        cores: Some(&["daphne", "dice", "fbalpha2012", "fbneo", "hbmame", "mame2000", "mame2003", "mame2003_midway", "mame2003_plus", "mame2009", "mame2010", "mame2015", "mame2016", "mame", "mamearcade"]),
        default_core: Some("mame"),
    },
    PlatformEntry {
        name: "Arduboy",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["ardens", "arduous"]),
        default_core: Some("ardens"),
    },
    PlatformEntry {
        name: "Atari 2600",
        runners: &["libretro", "stella"],
        default_runner: "libretro",
        cores: Some(&["stella", "stella2014", "stella2023"]),
        default_core: Some("stella"),
    },
    PlatformEntry {
        name: "Atari 5200",
        runners: &["libretro", "a5200"],
        default_runner: "libretro",
        cores: Some(&["atari800", "a5200"]),
        default_core: Some("atari800"),
    },
    PlatformEntry {
        name: "Atari 7800",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["prosystem"]),
        default_core: Some("prosystem"),
    },
    PlatformEntry {
        name: "Atari 400",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["atari800"]),
        default_core: Some("atari800"),
    },
    PlatformEntry {
        name: "Atari 800",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["atari800"]),
        default_core: Some("atari800"),
    },
    PlatformEntry {
        name: "Atari 600XL",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["atari800"]),
        default_core: Some("atari800"),
    },
    PlatformEntry {
        name: "Atari 800XL",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["atari800"]),
        default_core: Some("atari800"),
    },
    PlatformEntry {
        name: "Atari 130XE",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["atari800"]),
        default_core: Some("atari800"),
    },
    PlatformEntry {
        name: "Atari Jaguar",
        runners: &["libretro", "virtualjaguar"],
        default_runner: "libretro",
        cores: Some(&["virtualjaguar"]),
        default_core: Some("virtualjaguar"),
    },
    PlatformEntry {
        name: "Atari Lynx",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["handy", "holani", "mednafen_lynx"]),
        default_core: Some("mednafen_lynx"),
    },
    PlatformEntry {
        name: "Atari ST",
        runners: &["libretro", "hatari"],
        default_runner: "libretro",
        cores: Some(&["hatari"]),
        default_core: Some("hatari"),
    },
    PlatformEntry {
        name: "Atari STE",
        runners: &["libretro", "hatari"],
        default_runner: "libretro",
        cores: Some(&["hatari"]),
        default_core: Some("hatari"),
    },
    PlatformEntry {
        name: "Atari TT",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["hatari"]),
        default_core: Some("hatari"),
    },
    PlatformEntry {
        name: "Atari Falcon",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["hatari"]),
        default_core: Some("hatari"),
    },
    PlatformEntry {
        name: "Bandai WonderSwan",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["mednafen_wswan"]),
        default_core: Some("mednafen_wswan"),
    },
    PlatformEntry {
        name: "Bandai WonderSwan Color",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["mednafen_wswan"]),
        default_core: Some("mednafen_wswan"),
    },
    PlatformEntry {
        name: "Capcom CPS-1",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["fbalpha2012_cps1", "fbneo_cps12"]),
        default_core: Some("fbneo_cps12"),
    },
    PlatformEntry {
        name: "Capcom CPS-2",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["fbalpha2012_cps2", "fbneo_cps12"]),
        default_core: Some("fbneo_cps12"),
    },
    PlatformEntry {
        name: "Capcom CPS-3",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["fbalpha2012_cps3"]),
        default_core: Some("fbalpha2012_cps3"),
    },
    PlatformEntry {
        name: "ChaiLove",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["chailove"]),
        default_core: Some("chailove"),
    },
    PlatformEntry {
        name: "CHIP-8",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["jaxe"]),
        default_core: Some("jaxe"),
    },
    PlatformEntry {
        name: "ColecoVision",
        runners: &["libretro", "colem"],
        default_runner: "libretro",
        cores: Some(&["gearcoleco", "jollycv"]),
        default_core: Some("jollycv"),
    },
    PlatformEntry {
        name: "CreatiVision",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["jollycv"]),
        default_core: Some("jollycv"),
    },
    PlatformEntry {
        name: "MyVision",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["jollycv"]),
        default_core: Some("jollycv"),
    },
    PlatformEntry {
        name: "Commodore Amiga",
        runners: &["libretro", "fsuae"],
        default_runner: "libretro",
        cores: Some(&["puae", "puae2021"]),
        default_core: Some("puae"),
    },
    PlatformEntry {
        name: "Commodore 128",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_x128"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Commodore 16/Plus/4",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_xplus4"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Commodore 64",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_x64", "vice_x64sc", "x64sdl"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Commodore 64 Direct-to-TV",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_x64dtv"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Commodore 64 SuperCPU",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_xscpu64"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Commodore CBM-II 5x0",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_xcbm5x0"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Commodore CBM-II 6x0",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_xcbm2"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Commodore PET",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_xpet"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Commodore VIC-20",
        runners: &["libretro", "vice"],
        default_runner: "vice",
        cores: Some(&["vice_xvic"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Elektronika BK-0010",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["bk"]),
        default_core: Some("bk"),
    },
    PlatformEntry {
        name: "Elektronika BK-0010.01",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["bk"]),
        default_core: Some("bk"),
    },
    PlatformEntry {
        name: "Elektronika BK-0011 (M)",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["bk"]),
        default_core: Some("bk"),
    },
    PlatformEntry {
        name: "Enterprise 64",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["ep128emu"]),
        default_core: Some("ep128emu"),
    },
    PlatformEntry {
        name: "Enterprise 128",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["ep128emu"]),
        default_core: Some("ep128emu"),
    },
    PlatformEntry {
        name: "Fairchild Channel F",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["freechaf"]),
        default_core: Some("freechaf"),
    },
    PlatformEntry {
        name: "GAM4980",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["gam4980"]),
        default_core: Some("gam4980"),
    },
    PlatformEntry {
        name: "GCE Vectrex",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["vecx"]),
        default_core: Some("vecx"),
    },
    PlatformEntry {
        name: "Infocom Z-Machine",
        runners: &["libretro", "frotz"],
        default_runner: "libretro",
        cores: Some(&["mojozork"]),
        default_core: Some("mojozork"),
    },
    PlatformEntry {
        name: "Java ME",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["squirreljme"]),
        default_core: Some("squirreljme"),
    },
    PlatformEntry {
        name: "Magnavox Odyssey 2",
        runners: &["libretro", "o2em"],
        default_runner: "libretro",
        cores: Some(&["o2em"]),
        default_core: Some("o2em"),
    },
    PlatformEntry {
        name: "Philips Videopac+",
        runners: &["libretro", "o2em"],
        default_runner: "libretro",
        cores: Some(&["o2em"]),
        default_core: Some("o2em"),
    },
    PlatformEntry {
        name: "Mattel Intellivision",
        runners: &["libretro", "jzintv"],
        default_runner: "libretro",
        cores: Some(&["freeintv"]),
        default_core: Some("freeintv"),
    },
    PlatformEntry {
        name: "Mega Duck",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["sameduck"]),
        default_core: Some("sameduck"),
    },
    PlatformEntry {
        name: "Cougar Boy",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["sameduck"]),
        default_core: Some("sameduck"),
    },
    PlatformEntry {
        name: "MS-DOS",
        runners: &["libretro", "dosbox", "86box", "pcem"],
        default_runner: "libretro",
        cores: Some(&["dosbox_core", "dosbox_pure", "dosbox_svn", "virtualxt"]),
        default_core: Some("dosbox_core"),
    },
    PlatformEntry {
        name: "Microsoft MSX",
        runners: &["libretro", "openmsx"],
        default_runner: "libretro",
        cores: Some(&["fmsx"]),
        default_core: Some("fmsx"),
    },
    PlatformEntry {
        name: "Microsoft MSX2",
        runners: &["libretro", "openmsx"],
        default_runner: "libretro",
        cores: Some(&["fmsx"]),
        default_core: Some("fmsx"),
    },
    PlatformEntry {
        name: "Microsoft MSX2+",
        runners: &["libretro", "openmsx"],
        default_runner: "libretro",
        cores: Some(&["fmsx"]),
        default_core: Some("fmsx"),
    },
    PlatformEntry {
        name: "Microsoft XBOX",
        runners: &["xemu"],
        default_runner: "xemu",
        cores: None,
        default_core: None,
    },
    PlatformEntry {
        name: "NEC PC Engine",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["geargrafx", "mednafen_pce", "mednafen_pce_fast"]),
        default_core: Some("mednafen_pce"),
    },
    PlatformEntry {
        name: "NEC PC Engine CD",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["geargrafx", "mednafen_pce", "mednafen_pce_fast"]),
        default_core: Some("mednafen_pce"),
    },
    PlatformEntry {
        name: "NEC PC Engine SuperGrafx",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["geargrafx", "mednafen_pce", "mednafen_supergrafx"]),
        default_core: Some("mednafen_pce"),
    },
    PlatformEntry {
        name: "NEC PC-8000",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["quasi88"]),
        default_core: Some("quasi88"),
    },
    PlatformEntry {
        name: "NEC PC-8800",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["quasi88"]),
        default_core: Some("quasi88"),
    },
    PlatformEntry {
        name: "NEC PC-98",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["nekop2", "np2kai"]),
        default_core: Some("nekop2"),
    },
    PlatformEntry {
        name: "NEC PC-FX",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["mednafen_pcfx"]),
        default_core: Some("mednafen_pcfx"),
    },
    PlatformEntry {
        name: "Nintendo 3DS",
        runners: &["libretro", "citra"],
        default_runner: "libretro",
        cores: Some(&["citra", "citra2018"]),
        default_core: Some("citra"),
    },
    PlatformEntry {
        name: "Nintendo 64",
        runners: &["libretro", "mupen64plus", "rosaliesmupengui"],
        default_runner: "libretro",
        cores: Some(&["mupen64plus-next", "parallei_n64"]),
        default_core: Some("parallei_n64"),
    },
    PlatformEntry {
        name: "Nintendo DS",
        runners: &["libretro", "melonds", "desmume"],
        default_runner: "libretro",
        cores: Some(&["desmume", "desmume2015", "melonds", "melondsds", "noods", "skyemu"]),
        default_core: Some("melonds"),
    },
    PlatformEntry {
        name: "Nintendo Famicom",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["fceumm", "mesen", "nestopia", "quicknes"]),
        default_core: Some("mesen"),
    },
    PlatformEntry {
        name: "Nintendo Game Boy",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["DoubleCherryGB", "gambatte", "gearboy", "mesen-s", "sameboy", "skyemu", "tgbdual"]),
        default_core: Some("gambatte"),
    },
    PlatformEntry {
        name: "Nintendo Game Boy Advance",
        runners: &["libretro", "mednafen", "mgba"],
        default_runner: "libretro",
        cores: Some(&["gpsp", "mgba", "skyemu", "vbam", "vba_next"]),
        default_core: Some("mgba"),
    },
    PlatformEntry {
        name: "Nintendo Game Boy Color",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["DoubleCherryGB", "gambatte", "gearboy", "mesen-s", "sameboy", "skyemu", "tgbdual"]),
        default_core: Some("gambatte"),
    },
    PlatformEntry {
        name: "Nintendo GameCube",
        runners: &["libretro", "dolphin"],
        default_runner: "libretro",
        cores: Some(&["dolphin"]),
        default_core: Some("dolphin"),
    },
    PlatformEntry {
        name: "Nintendo Pokemon Mini",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["pokemini"]),
        default_core: Some("pokemini"),
    },
    PlatformEntry {
        name: "Nintendo NES",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["fceumm", "mesen", "nestopia", "quicknes"]),
        default_core: Some("mesen"),
    },
    PlatformEntry {
        name: "Nintendo SNES",
        runners: &["libretro", "mednafen", "snes9x"],
        default_runner: "libretro",
        cores: Some(&["bsnes", "bsnes-jg", "bsnes2014_accuracy", "bsnes2014_balanced", "bsnes2014_performance", "bsnes_hd", "bsnes_mercury_accuracy", "bsnes_mercury_balanced", "bsnes_mercury_performance", "mednafen_supafaust", "snes9x", "snes9x2002", "snes9x2005", "snes9x2005_plus", "snes9x2010", "mesen-s"]),
        default_core: Some("mednafen_supafaust"),
    },
    PlatformEntry {
        name: "Nintendo Super Famicom",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["bsnes", "bsnes-jg", "bsnes2014_accuracy", "bsnes2014_balanced", "bsnes2014_performance", "bsnes_hd", "bsnes_mercury_accuracy", "bsnes_mercury_balanced", "bsnes_mercury_performance", "mednafen_supafaust", "snes9x", "snes9x2002", "snes9x2005", "snes9x2005_plus", "snes9x2010", "mesen-s"]),
        default_core: Some("mednafen_supafaust"),
    },
    PlatformEntry {
        name: "Nintendo Switch",
        runners: &["yuzu", "ryujinx"],
        default_runner: "ryujinx",
        cores: None,
        default_core: None,
    },
    PlatformEntry {
        name: "Nintendo Virtual Boy",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["mednafen_vb"]),
        default_core: Some("mednafen_vb"),
    },
    PlatformEntry {
        name: "Nintendo Wii",
        runners: &["libretro", "dolphin"],
        default_runner: "libretro",
        cores: Some(&["dolphin"]),
        default_core: Some("dolphin"),
    },
    PlatformEntry {
        name: "Nintendo Wii U",
        runners: &["cemu"],
        default_runner: "cemu",
        cores: None,
        default_core: None,
    },
    PlatformEntry {
        name: "Philips CDi",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["same_cdi", "cdi2015"]),
        default_core: Some("same_cdi"),
    },
    PlatformEntry {
        name: "Philips P2000T",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["m2000"]),
        default_core: Some("m2000"),
    },
    PlatformEntry {
        name: "PICO-8",
        runners: &["libretro", "pico8"],
        default_runner: "libretro",
        cores: Some(&["retro8"]),
        default_core: Some("retro8"),
    },
    PlatformEntry {
        name: "S-CHIP",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["jaxe"]),
        default_core: Some("jaxe"),
    },
    PlatformEntry {
        name: "ScummVM",
        runners: &["libretro", "scummvm"],
        default_runner: "scummvm",
        cores: Some(&["scummvm"]),
        default_core: None,
    },
    PlatformEntry {
        name: "Sega 32X",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["picodrive"]),
        default_core: Some("picodrive"),
    },
    PlatformEntry {
        name: "Sega CD",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["clownmdemu", "genesis_plus_gx", "genesis_plus_gx_wide", "picodrive"]),
        default_core: Some("picodrive"),
    },
    PlatformEntry {
        name: "Sega Dreamcast",
        runners: &["libretro", "redream", "reicast"],
        default_runner: "libretro",
        cores: Some(&["flycast"]),
        default_core: Some("flycast"),
    },
    PlatformEntry {
        name: "Sega Game Gear",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["smsplus", "genesis_plus_gx", "genesis_plus_gx_wide", "picodrive", "gearsystem"]),
        default_core: Some("picodrive"),
    },
    PlatformEntry {
        name: "Sega Genesis",
        runners: &["libretro", "dgen"],
        default_runner: "libretro",
        cores: Some(&["blastem", "clownmdemu", "genesis_plus_gx", "genesis_plus_gx_wide", "picodrive"]),
        default_core: Some("picodrive"),
    },
    PlatformEntry {
        name: "Sega Mega CD",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["clownmdemu", "genesis_plus_gx", "genesis_plus_gx_wide", "picodrive"]),
        default_core: Some("picodrive"),
    },
    PlatformEntry {
        name: "Sega Mega Drive",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["blastem", "clownmdemu", "genesis_plus_gx", "genesis_plus_gx_wide", "picodrive"]),
        default_core: Some("picodrive"),
    },
    PlatformEntry {
        name: "Sega Master System",
        runners: &["libretro", "osmose"],
        default_runner: "libretro",
        cores: Some(&["smsplus", "genesis_plus_gx", "genesis_plus_gx_wide", "picodrive", "gearsystem"]),
        default_core: Some("picodrive"),
    },
    PlatformEntry {
        name: "Sega Naomi",
        runners: &["libretro", "redream", "reicast"],
        default_runner: "libretro",
        cores: Some(&["flycast"]),
        default_core: Some("flycast"),
    },
    PlatformEntry {
        name: "Sega PICO",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["picodrive"]),
        default_core: Some("picodrive"),
    },
    PlatformEntry {
        name: "Sega Saturn",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["kronos", "mednafen_saturn", "yabasanshiro", "yabause"]),
        default_core: Some("mednafen_saturn"),
    },
    PlatformEntry {
        name: "Sega SG-1000",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["gearsystem"]),
        default_core: Some("gearsystem"),
    },
    PlatformEntry {
        name: "Sega Titan Video",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["kronos"]),
        default_core: Some("kronos"),
    },
    PlatformEntry {
        name: "Sharp X1",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["x1"]),
        default_core: Some("x1"),
    },
    PlatformEntry {
        name: "Sharp X68000",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["px68k"]),
        default_core: Some("px68k"),
    },
    PlatformEntry {
        name: "Sinclair ZX81",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["81"]),
        default_core: Some("81"),
    },
    PlatformEntry {
        name: "Sinclair ZX Spectrum",
        runners: &["libretro", "speccy"],
        default_runner: "libretro",
        cores: Some(&["fuse"]),
        default_core: Some("fuse"),
    },
    PlatformEntry {
        name: "SNK Neo Geo AES",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["fbalpha2012_neogeo", "fbneo_neogeo"]),
        default_core: Some("fbneo_neogeo"),
    },
    PlatformEntry {
        name: "SNK Neo Geo CD",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["fbalpha2012_neogeo", "fbneo_neogeo"]),
        default_core: Some("fbneo_neogeo"),
    },
    PlatformEntry {
        name: "SNK Neo Geo MVS",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["fbalpha2012_neogeo", "fbneo_neogeo"]),
        default_core: Some("fbneo_neogeo"),
    },
    PlatformEntry {
        name: "SNK Neo Geo Pocket",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["mednafen_ngp", "race"]),
        default_core: Some("mednafen_ngp"),
    },
    PlatformEntry {
        name: "SNK Neo Geo Pocket Color",
        runners: &["libretro", "mednafen"],
        default_runner: "libretro",
        cores: Some(&["mednafen_ngp", "race"]),
        default_core: Some("mednafen_ngp"),
    },
    PlatformEntry {
        name: "Sony PlayStation",
        runners: &["libretro", "mednafen", "duckstation"],
        default_runner: "libretro",
        cores: Some(&["mednafen_psx", "mednafen_psx_hw", "pcsx_rearmed", "swanstation"]),
        default_core: Some("mednafen_psx_hw"),
    },
    PlatformEntry {
        name: "Sony PlayStation 2",
        runners: &["libretro", "pcsx2"],
        default_runner: "libretro",
        cores: Some(&["pcsx2"]),
        default_core: Some("pcsx2"),
    },
    PlatformEntry {
        name: "Sony PlayStation 3",
        runners: &["rpcs3"],
        default_runner: "rpcs3",
        cores: None,
        default_core: None,
    },
    PlatformEntry {
        name: "Sony PlayStation Portable",
        runners: &["libretro", "ppsspp"],
        default_runner: "libretro",
        cores: Some(&["ppsspp"]),
        default_core: Some("ppsspp"),
    },
    PlatformEntry {
        name: "Sony PlayStation Vita",
        runners: &["vita3k"],
        default_runner: "vita3k",
        cores: None,
        default_core: None,
    },
    PlatformEntry {
        name: "Tamagachi P1",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["tamalibretro"]),
        default_core: Some("tamalibretro"),
    },
    PlatformEntry {
        name: "Texas Instruments TI-83",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["numero"]),
        default_core: Some("numero"),
    },
    PlatformEntry {
        name: "Thomson MO/TO",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["theodore"]),
        default_core: Some("theodore"),
    },
    PlatformEntry {
        name: "TIC-80",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["tic80"]),
        default_core: Some("tic80"),
    },
    PlatformEntry {
        name: "Uzebox",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["uzem"]),
        default_core: Some("uzem"),
    },
    PlatformEntry {
        name: "VaporSpec",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["vaporspec"]),
        default_core: Some("vaporspec"),
    },
    PlatformEntry {
        name: "Vircon32",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["vircon32"]),
        default_core: Some("vircon32"),
    },
    PlatformEntry {
        name: "WASM-4",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["wasm4"]),
        default_core: Some("wasm4"),
    },
    PlatformEntry {
        name: "Watara Supervision",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["potator"]),
        default_core: Some("potator"),
    },
    PlatformEntry {
        name: "XO-CHIP",
        runners: &["libretro"],
        default_runner: "libretro",
        cores: Some(&["jaxe"]),
        default_core: Some("jaxe"),
    },
];
