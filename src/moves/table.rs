//! Category / type / base power for the moves that show up in competitive pools.
//!
//! Variable-power moves (Low Kick, Gyro Ball, Grass Knot, ...) and fixed-damage
//! moves carry a power of 0 so that power-threshold checks ignore them.

use super::{MoveCategory, MoveInfo};
use std::borrow::Cow;

const fn physical(move_type: &'static str, power: u16) -> MoveInfo {
    MoveInfo {
        category: MoveCategory::Physical,
        move_type: Cow::Borrowed(move_type),
        power,
    }
}

const fn special(move_type: &'static str, power: u16) -> MoveInfo {
    MoveInfo {
        category: MoveCategory::Special,
        move_type: Cow::Borrowed(move_type),
        power,
    }
}

const fn status(move_type: &'static str) -> MoveInfo {
    MoveInfo {
        category: MoveCategory::Status,
        move_type: Cow::Borrowed(move_type),
        power: 0,
    }
}

pub static MOVE_TABLE: phf::Map<&'static str, MoveInfo> = phf::phf_map! {
    // Physical
    "accelerock" => physical("Rock", 40),
    "acrobatics" => physical("Flying", 55),
    "aerialace" => physical("Flying", 60),
    "aquacutter" => physical("Water", 70),
    "aquajet" => physical("Water", 40),
    "aquastep" => physical("Water", 80),
    "aquatail" => physical("Water", 90),
    "armthrust" => physical("Fighting", 15),
    "assurance" => physical("Dark", 60),
    "axekick" => physical("Fighting", 120),
    "bite" => physical("Dark", 60),
    "bitterblade" => physical("Fire", 90),
    "blazekick" => physical("Fire", 85),
    "bodypress" => physical("Fighting", 80),
    "bodyslam" => physical("Normal", 85),
    "boltstrike" => physical("Electric", 130),
    "bonemerang" => physical("Ground", 50),
    "bonerush" => physical("Ground", 25),
    "bounce" => physical("Flying", 85),
    "bravebird" => physical("Flying", 120),
    "brickbreak" => physical("Fighting", 75),
    "brutalswing" => physical("Dark", 60),
    "bugbite" => physical("Bug", 60),
    "bulldoze" => physical("Ground", 60),
    "bulletpunch" => physical("Steel", 40),
    "bulletseed" => physical("Grass", 25),
    "ceaselessedge" => physical("Dark", 65),
    "closecombat" => physical("Fighting", 120),
    "collisioncourse" => physical("Fighting", 100),
    "cometpunch" => physical("Normal", 18),
    "crabhammer" => physical("Water", 100),
    "crosschop" => physical("Fighting", 100),
    "crosspoison" => physical("Poison", 70),
    "crunch" => physical("Dark", 80),
    "crushclaw" => physical("Normal", 75),
    "darkestlariat" => physical("Dark", 85),
    "dig" => physical("Ground", 80),
    "dive" => physical("Water", 80),
    "doubleedge" => physical("Normal", 120),
    "doublehit" => physical("Normal", 35),
    "doubleironbash" => physical("Steel", 60),
    "doublekick" => physical("Fighting", 30),
    "doubleshock" => physical("Electric", 120),
    "dragonascent" => physical("Flying", 120),
    "dragonclaw" => physical("Dragon", 80),
    "dragondarts" => physical("Dragon", 50),
    "dragonhammer" => physical("Dragon", 90),
    "dragonrush" => physical("Dragon", 100),
    "dragontail" => physical("Dragon", 60),
    "drainpunch" => physical("Fighting", 75),
    "drillpeck" => physical("Flying", 80),
    "drillrun" => physical("Ground", 80),
    "dualchop" => physical("Dragon", 40),
    "dualwingbeat" => physical("Flying", 40),
    "dynamicpunch" => physical("Fighting", 100),
    "earthquake" => physical("Ground", 100),
    "endeavor" => physical("Normal", 0),
    "explosion" => physical("Normal", 250),
    "extremespeed" => physical("Normal", 80),
    "facade" => physical("Normal", 70),
    "fakeout" => physical("Normal", 40),
    "feint" => physical("Normal", 30),
    "falseswipe" => physical("Normal", 40),
    "firefang" => physical("Fire", 65),
    "firelash" => physical("Fire", 80),
    "firepunch" => physical("Fire", 75),
    "firstimpression" => physical("Bug", 90),
    "fishiousrend" => physical("Water", 85),
    "flamecharge" => physical("Fire", 50),
    "flamewheel" => physical("Fire", 60),
    "flareblitz" => physical("Fire", 120),
    "fling" => physical("Dark", 0),
    "flipturn" => physical("Water", 60),
    "fly" => physical("Flying", 90),
    "focuspunch" => physical("Fighting", 150),
    "foulplay" => physical("Dark", 95),
    "freezeshock" => physical("Ice", 140),
    "furyattack" => physical("Normal", 15),
    "furyswipes" => physical("Normal", 18),
    "fusionbolt" => physical("Electric", 100),
    "geargrind" => physical("Steel", 50),
    "gigaimpact" => physical("Normal", 150),
    "gigatonhammer" => physical("Steel", 160),
    "glaciallance" => physical("Ice", 120),
    "glaiverush" => physical("Dragon", 120),
    "grassyglide" => physical("Grass", 55),
    "gravapple" => physical("Grass", 80),
    "gunkshot" => physical("Poison", 120),
    "gyroball" => physical("Steel", 0),
    "hammerarm" => physical("Fighting", 100),
    "headbutt" => physical("Normal", 70),
    "headcharge" => physical("Normal", 120),
    "headlongrush" => physical("Ground", 120),
    "headsmash" => physical("Rock", 150),
    "heatcrash" => physical("Fire", 0),
    "heavyslam" => physical("Steel", 0),
    "highhorsepower" => physical("Ground", 95),
    "highjumpkick" => physical("Fighting", 130),
    "hornattack" => physical("Normal", 65),
    "hornleech" => physical("Grass", 75),
    "hyperfang" => physical("Normal", 80),
    "hyperspacefury" => physical("Dark", 100),
    "icefang" => physical("Ice", 65),
    "icehammer" => physical("Ice", 100),
    "icepunch" => physical("Ice", 75),
    "iceshard" => physical("Ice", 40),
    "icespinner" => physical("Ice", 80),
    "iciclecrash" => physical("Ice", 85),
    "iciclespear" => physical("Ice", 25),
    "ironhead" => physical("Steel", 80),
    "irontail" => physical("Steel", 100),
    "ivycudgel" => physical("Grass", 100),
    "jawlock" => physical("Dark", 80),
    "jetpunch" => physical("Water", 60),
    "jumpkick" => physical("Fighting", 100),
    "karatechop" => physical("Fighting", 50),
    "knockoff" => physical("Dark", 65),
    "kowtowcleave" => physical("Dark", 85),
    "lashout" => physical("Dark", 75),
    "lastresort" => physical("Normal", 140),
    "lastrespects" => physical("Ghost", 50),
    "leafblade" => physical("Grass", 90),
    "leechlife" => physical("Bug", 80),
    "lick" => physical("Ghost", 30),
    "liquidation" => physical("Water", 85),
    "lowkick" => physical("Fighting", 0),
    "lowsweep" => physical("Fighting", 65),
    "lunge" => physical("Bug", 80),
    "machpunch" => physical("Fighting", 40),
    "megahorn" => physical("Bug", 120),
    "megakick" => physical("Normal", 120),
    "megapunch" => physical("Normal", 80),
    "meteorassault" => physical("Fighting", 150),
    "meteormash" => physical("Steel", 90),
    "mortalspin" => physical("Poison", 30),
    "mountaingale" => physical("Ice", 100),
    "nightslash" => physical("Dark", 70),
    "nuzzle" => physical("Electric", 20),
    "orderup" => physical("Dragon", 80),
    "outrage" => physical("Dragon", 120),
    "payback" => physical("Dark", 50),
    "phantomforce" => physical("Ghost", 90),
    "pinmissile" => physical("Bug", 25),
    "plasmafists" => physical("Electric", 100),
    "playrough" => physical("Fairy", 90),
    "pluck" => physical("Flying", 60),
    "poisonfang" => physical("Poison", 50),
    "poisonjab" => physical("Poison", 80),
    "poisontail" => physical("Poison", 50),
    "poltergeist" => physical("Ghost", 110),
    "populationbomb" => physical("Normal", 20),
    "pounce" => physical("Bug", 50),
    "pound" => physical("Normal", 40),
    "powertrip" => physical("Dark", 20),
    "poweruppunch" => physical("Fighting", 40),
    "powerwhip" => physical("Grass", 120),
    "precipiceblades" => physical("Ground", 120),
    "psyblade" => physical("Psychic", 80),
    "psychicfangs" => physical("Psychic", 85),
    "psychocut" => physical("Psychic", 70),
    "pursuit" => physical("Dark", 40),
    "quickattack" => physical("Normal", 40),
    "ragefist" => physical("Ghost", 50),
    "ragingbull" => physical("Normal", 90),
    "ragingfury" => physical("Fire", 120),
    "rapidspin" => physical("Normal", 50),
    "razorleaf" => physical("Grass", 55),
    "razorshell" => physical("Water", 75),
    "retaliate" => physical("Normal", 70),
    "return" => physical("Normal", 102),
    "revenge" => physical("Fighting", 60),
    "reversal" => physical("Fighting", 0),
    "rockblast" => physical("Rock", 25),
    "rockslide" => physical("Rock", 75),
    "rocktomb" => physical("Rock", 60),
    "rockwrecker" => physical("Rock", 150),
    "rollout" => physical("Rock", 30),
    "sacredfire" => physical("Fire", 100),
    "sacredsword" => physical("Fighting", 90),
    "saltcure" => physical("Rock", 40),
    "scaleshot" => physical("Dragon", 25),
    "scratch" => physical("Normal", 40),
    "seedbomb" => physical("Grass", 80),
    "seismictoss" => physical("Fighting", 0),
    "shadowclaw" => physical("Ghost", 70),
    "shadowforce" => physical("Ghost", 120),
    "shadowpunch" => physical("Ghost", 60),
    "shadowsneak" => physical("Ghost", 40),
    "skyattack" => physical("Flying", 140),
    "skyuppercut" => physical("Fighting", 85),
    "slam" => physical("Normal", 80),
    "slash" => physical("Normal", 70),
    "smartstrike" => physical("Steel", 70),
    "solarblade" => physical("Grass", 125),
    "spiritbreak" => physical("Fairy", 75),
    "spiritshackle" => physical("Ghost", 80),
    "spinout" => physical("Steel", 100),
    "steelwing" => physical("Steel", 70),
    "stomp" => physical("Normal", 65),
    "stompingtantrum" => physical("Ground", 75),
    "stoneaxe" => physical("Rock", 65),
    "stoneedge" => physical("Rock", 100),
    "stormthrow" => physical("Fighting", 60),
    "strength" => physical("Normal", 80),
    "suckerpunch" => physical("Dark", 70),
    "sunsteelstrike" => physical("Steel", 100),
    "superfang" => physical("Normal", 0),
    "superpower" => physical("Fighting", 120),
    "surgingstrikes" => physical("Water", 25),
    "tackle" => physical("Normal", 40),
    "tailslap" => physical("Normal", 25),
    "takedown" => physical("Normal", 90),
    "temperflare" => physical("Fire", 75),
    "thief" => physical("Dark", 60),
    "thousandarrows" => physical("Ground", 90),
    "thrash" => physical("Normal", 120),
    "throatchop" => physical("Dark", 80),
    "thunderfang" => physical("Electric", 65),
    "thunderouskick" => physical("Fighting", 90),
    "thunderpunch" => physical("Electric", 75),
    "trailblaze" => physical("Grass", 50),
    "triplearrows" => physical("Fighting", 90),
    "tripleaxel" => physical("Ice", 20),
    "tripledive" => physical("Water", 30),
    "uturn" => physical("Bug", 70),
    "vcreate" => physical("Fire", 180),
    "vinewhip" => physical("Grass", 45),
    "volttackle" => physical("Electric", 120),
    "waterfall" => physical("Water", 80),
    "wavecrash" => physical("Water", 120),
    "wickedblow" => physical("Dark", 75),
    "wildcharge" => physical("Electric", 90),
    "wingattack" => physical("Flying", 60),
    "woodhammer" => physical("Grass", 120),
    "xscissor" => physical("Bug", 80),
    "zenheadbutt" => physical("Psychic", 80),
    "zingzap" => physical("Electric", 80),
    "zippyzap" => physical("Electric", 80),

    // Special
    "absorb" => special("Grass", 20),
    "acidspray" => special("Poison", 40),
    "aeroblast" => special("Flying", 100),
    "airslash" => special("Flying", 75),
    "alluringvoice" => special("Fairy", 80),
    "ancientpower" => special("Rock", 60),
    "appleacid" => special("Grass", 80),
    "armorcannon" => special("Fire", 120),
    "astralbarrage" => special("Ghost", 120),
    "aurasphere" => special("Fighting", 80),
    "aurorabeam" => special("Ice", 65),
    "bittermalice" => special("Ghost", 75),
    "blastburn" => special("Fire", 150),
    "bleakwindstorm" => special("Flying", 100),
    "blizzard" => special("Ice", 110),
    "blueflare" => special("Fire", 130),
    "boomburst" => special("Normal", 140),
    "bugbuzz" => special("Bug", 90),
    "burningjealousy" => special("Fire", 70),
    "chargebeam" => special("Electric", 50),
    "chillingwater" => special("Water", 50),
    "clangingscales" => special("Dragon", 110),
    "clearsmog" => special("Poison", 50),
    "darkpulse" => special("Dark", 80),
    "dazzlinggleam" => special("Fairy", 80),
    "disarmingvoice" => special("Fairy", 40),
    "discharge" => special("Electric", 80),
    "doomdesire" => special("Steel", 140),
    "dracometeor" => special("Dragon", 130),
    "dragonbreath" => special("Dragon", 60),
    "dragonenergy" => special("Dragon", 150),
    "dragonpulse" => special("Dragon", 85),
    "drainingkiss" => special("Fairy", 50),
    "dreameater" => special("Psychic", 100),
    "dynamaxcannon" => special("Dragon", 100),
    "earthpower" => special("Ground", 90),
    "echoedvoice" => special("Normal", 40),
    "eeriespell" => special("Psychic", 80),
    "electroball" => special("Electric", 0),
    "electroshot" => special("Electric", 130),
    "electroweb" => special("Electric", 55),
    "energyball" => special("Grass", 90),
    "eruption" => special("Fire", 150),
    "esperwing" => special("Psychic", 80),
    "expandingforce" => special("Psychic", 80),
    "extrasensory" => special("Psychic", 80),
    "fierydance" => special("Fire", 80),
    "fierywrath" => special("Dark", 90),
    "fireblast" => special("Fire", 110),
    "flamethrower" => special("Fire", 90),
    "flashcannon" => special("Steel", 80),
    "fleurcannon" => special("Fairy", 130),
    "focusblast" => special("Fighting", 120),
    "freezedry" => special("Ice", 70),
    "frostbreath" => special("Ice", 60),
    "fusionflare" => special("Fire", 100),
    "futuresight" => special("Psychic", 120),
    "gigadrain" => special("Grass", 75),
    "grassknot" => special("Grass", 0),
    "gust" => special("Flying", 40),
    "heatwave" => special("Fire", 95),
    "hex" => special("Ghost", 65),
    "hurricane" => special("Flying", 110),
    "hydrocannon" => special("Water", 150),
    "hydropump" => special("Water", 110),
    "hydrosteam" => special("Water", 80),
    "hyperbeam" => special("Normal", 150),
    "hypervoice" => special("Normal", 90),
    "icebeam" => special("Ice", 90),
    "icywind" => special("Ice", 55),
    "infernalparade" => special("Ghost", 60),
    "judgment" => special("Normal", 100),
    "lavaplume" => special("Fire", 80),
    "leafstorm" => special("Grass", 130),
    "luminacrash" => special("Psychic", 80),
    "lusterpurge" => special("Psychic", 95),
    "magmastorm" => special("Fire", 100),
    "makeitrain" => special("Steel", 120),
    "matchagotcha" => special("Grass", 80),
    "meteorbeam" => special("Rock", 120),
    "mindblown" => special("Fire", 150),
    "mistball" => special("Psychic", 95),
    "moonblast" => special("Fairy", 95),
    "muddywater" => special("Water", 90),
    "mudshot" => special("Ground", 55),
    "mysticalfire" => special("Fire", 75),
    "nightdaze" => special("Dark", 85),
    "nightshade" => special("Ghost", 0),
    "oblivionwing" => special("Flying", 80),
    "originpulse" => special("Water", 110),
    "overdrive" => special("Electric", 80),
    "overheat" => special("Fire", 130),
    "paraboliccharge" => special("Electric", 65),
    "photongeyser" => special("Psychic", 100),
    "pollenpuff" => special("Bug", 90),
    "powergem" => special("Rock", 80),
    "psybeam" => special("Psychic", 65),
    "psychic" => special("Psychic", 90),
    "psychicnoise" => special("Psychic", 75),
    "psyshock" => special("Psychic", 80),
    "psystrike" => special("Psychic", 100),
    "relicsong" => special("Normal", 75),
    "risingvoltage" => special("Electric", 70),
    "roaroftime" => special("Dragon", 150),
    "ruination" => special("Dark", 0),
    "sandsearstorm" => special("Ground", 100),
    "scald" => special("Water", 80),
    "scorchingsands" => special("Ground", 70),
    "searingshot" => special("Fire", 100),
    "seedflare" => special("Grass", 120),
    "shadowball" => special("Ghost", 80),
    "sheercold" => special("Ice", 0),
    "shellsidearm" => special("Poison", 90),
    "shockwave" => special("Electric", 60),
    "signalbeam" => special("Bug", 75),
    "silverwind" => special("Bug", 60),
    "sludgebomb" => special("Poison", 90),
    "sludgewave" => special("Poison", 95),
    "smog" => special("Poison", 30),
    "snarl" => special("Dark", 55),
    "snore" => special("Normal", 50),
    "solarbeam" => special("Grass", 120),
    "spacialrend" => special("Dragon", 100),
    "sparklingaria" => special("Water", 90),
    "springtidestorm" => special("Fairy", 100),
    "steameruption" => special("Water", 110),
    "steelbeam" => special("Steel", 140),
    "storedpower" => special("Psychic", 20),
    "strangesteam" => special("Fairy", 90),
    "surf" => special("Water", 90),
    "swift" => special("Normal", 60),
    "technoblast" => special("Normal", 120),
    "terablast" => special("Normal", 80),
    "thunder" => special("Electric", 110),
    "thunderbolt" => special("Electric", 90),
    "thunderclap" => special("Electric", 70),
    "torchsong" => special("Fire", 80),
    "triattack" => special("Normal", 80),
    "twister" => special("Dragon", 40),
    "uproar" => special("Normal", 90),
    "vacuumwave" => special("Fighting", 40),
    "venoshock" => special("Poison", 65),
    "voltswitch" => special("Electric", 70),
    "waterpulse" => special("Water", 60),
    "watershuriken" => special("Water", 15),
    "waterspout" => special("Water", 150),
    "weatherball" => special("Normal", 50),
    "wildboltstorm" => special("Electric", 100),

    // Status
    "acidarmor" => status("Poison"),
    "acupressure" => status("Normal"),
    "agility" => status("Psychic"),
    "amnesia" => status("Psychic"),
    "aquaring" => status("Water"),
    "aromatherapy" => status("Grass"),
    "auroraveil" => status("Ice"),
    "autotomize" => status("Steel"),
    "banefulbunker" => status("Poison"),
    "batonpass" => status("Normal"),
    "bellydrum" => status("Normal"),
    "block" => status("Normal"),
    "bulkup" => status("Fighting"),
    "burningbulwark" => status("Fire"),
    "calmmind" => status("Psychic"),
    "celebrate" => status("Normal"),
    "charm" => status("Fairy"),
    "chillyreception" => status("Ice"),
    "clangoroussoul" => status("Dragon"),
    "coil" => status("Poison"),
    "confuseray" => status("Ghost"),
    "cosmicpower" => status("Psychic"),
    "cottonguard" => status("Grass"),
    "cottonspore" => status("Grass"),
    "courtchange" => status("Normal"),
    "curse" => status("Ghost"),
    "defendorder" => status("Bug"),
    "defog" => status("Flying"),
    "destinybond" => status("Ghost"),
    "detect" => status("Fighting"),
    "disable" => status("Normal"),
    "doubleteam" => status("Normal"),
    "dragondance" => status("Dragon"),
    "encore" => status("Normal"),
    "endure" => status("Normal"),
    "faketears" => status("Dark"),
    "filletaway" => status("Normal"),
    "geomancy" => status("Fairy"),
    "glare" => status("Normal"),
    "grasswhistle" => status("Grass"),
    "growl" => status("Normal"),
    "growth" => status("Normal"),
    "hail" => status("Ice"),
    "happyhour" => status("Normal"),
    "haze" => status("Ice"),
    "healbell" => status("Normal"),
    "healingwish" => status("Psychic"),
    "healorder" => status("Bug"),
    "holdhands" => status("Normal"),
    "honeclaws" => status("Dark"),
    "howl" => status("Normal"),
    "hypnosis" => status("Psychic"),
    "irondefense" => status("Steel"),
    "junglehealing" => status("Grass"),
    "kingsshield" => status("Steel"),
    "leechseed" => status("Grass"),
    "lifedew" => status("Water"),
    "lightscreen" => status("Psychic"),
    "lovelykiss" => status("Normal"),
    "lunardance" => status("Psychic"),
    "magiccoat" => status("Psychic"),
    "meditate" => status("Psychic"),
    "memento" => status("Dark"),
    "metalsound" => status("Steel"),
    "milkdrink" => status("Normal"),
    "minimize" => status("Normal"),
    "moonlight" => status("Fairy"),
    "morningsun" => status("Normal"),
    "nastyplot" => status("Dark"),
    "nobleroar" => status("Normal"),
    "noretreat" => status("Fighting"),
    "obstruct" => status("Dark"),
    "painsplit" => status("Normal"),
    "partingshot" => status("Dark"),
    "perishsong" => status("Normal"),
    "poisonpowder" => status("Poison"),
    "protect" => status("Normal"),
    "quiverdance" => status("Bug"),
    "raindance" => status("Water"),
    "recover" => status("Normal"),
    "reflect" => status("Psychic"),
    "rest" => status("Psychic"),
    "revivalblessing" => status("Normal"),
    "roar" => status("Normal"),
    "rockpolish" => status("Rock"),
    "roost" => status("Flying"),
    "safeguard" => status("Normal"),
    "sandstorm" => status("Rock"),
    "scaryface" => status("Normal"),
    "screech" => status("Normal"),
    "shedtail" => status("Normal"),
    "shellsmash" => status("Normal"),
    "shiftgear" => status("Steel"),
    "shoreup" => status("Ground"),
    "silktrap" => status("Bug"),
    "sing" => status("Normal"),
    "slackoff" => status("Normal"),
    "sleeppowder" => status("Grass"),
    "sleeptalk" => status("Normal"),
    "snowscape" => status("Ice"),
    "softboiled" => status("Normal"),
    "spicyextract" => status("Grass"),
    "spikes" => status("Ground"),
    "spikyshield" => status("Grass"),
    "spore" => status("Grass"),
    "stealthrock" => status("Rock"),
    "stickyweb" => status("Bug"),
    "strengthsap" => status("Grass"),
    "stunspore" => status("Grass"),
    "substitute" => status("Normal"),
    "sunnyday" => status("Fire"),
    "supersonic" => status("Normal"),
    "swagger" => status("Normal"),
    "switcheroo" => status("Dark"),
    "swordsdance" => status("Normal"),
    "synthesis" => status("Grass"),
    "tailglow" => status("Bug"),
    "tailwind" => status("Flying"),
    "takeheart" => status("Psychic"),
    "taunt" => status("Dark"),
    "teleport" => status("Psychic"),
    "thunderwave" => status("Electric"),
    "tickle" => status("Normal"),
    "tidyup" => status("Normal"),
    "torment" => status("Dark"),
    "toxic" => status("Poison"),
    "toxicspikes" => status("Poison"),
    "trick" => status("Psychic"),
    "trickroom" => status("Psychic"),
    "victorydance" => status("Fighting"),
    "whirlwind" => status("Normal"),
    "willowisp" => status("Fire"),
    "wish" => status("Normal"),
    "workup" => status("Normal"),
    "yawn" => status("Normal"),
};
