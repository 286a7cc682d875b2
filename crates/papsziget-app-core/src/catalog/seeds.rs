// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Compiled-in island objects.

use super::{CatalogItem, Dimensions, MapPosition, ObjectCategory};

pub(super) struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ObjectCategory,
    at: (f64, f64),
    cost: u64,
    cost_unit: &'static str,
    color: &'static str,
    material: &'static str,
    size_cm: (f64, f64, f64),
    weight_kg: f64,
    image: &'static str,
}

impl Seed {
    pub(super) fn to_item(&self) -> CatalogItem {
        CatalogItem {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            category: self.category,
            location: MapPosition {
                x: self.at.0,
                y: self.at.1,
            },
            cost: self.cost,
            cost_unit: self.cost_unit.to_owned(),
            color: self.color.to_owned(),
            material: self.material.to_owned(),
            dimensions: Dimensions {
                width_cm: self.size_cm.0,
                height_cm: self.size_cm.1,
                depth_cm: self.size_cm.2,
            },
            weight_kg: self.weight_kg,
            image_path: (!self.image.is_empty()).then(|| self.image.to_owned()),
        }
    }
}

pub(super) const SEEDS: &[Seed] = &[
    Seed {
        id: "A3F9Z1",
        name: "Acél kábel",
        description: "Három eres acél kábel köteg. Néhol hozzá van erősítve egy szigeteletlen \
            acél kábel is, ami valószínűleg földelővezeték lehetett.",
        category: ObjectCategory::Object,
        at: (48.0, 64.0),
        cost: 5_600,
        cost_unit: "Ft",
        color: "fekete",
        material: "acél sodrony + műanyag burkolat",
        size_cm: (1200.0, 1.5, 0.0),
        weight_kg: 5.0,
        image: "/objects/acel_kabel.jpg",
    },
    Seed {
        id: "B7K2M9",
        name: "Ajtólakk",
        description: "Pergő ajtólakk, kék színben.",
        category: ObjectCategory::Waste,
        at: (48.0, 66.0),
        cost: 150,
        cost_unit: "Ft/m2",
        color: "királykék",
        material: "",
        size_cm: (0.0, 0.0, 0.03),
        weight_kg: 10.0,
        image: "/objects/ajtolakk.jpg",
    },
    Seed {
        id: "C1D8Q4",
        name: "Beton elem",
        description: "Négyzet alakú beton elem, üreges.",
        category: ObjectCategory::Object,
        at: (37.2, 37.5),
        cost: 3_500,
        cost_unit: "Ft",
        color: "szürke",
        material: "beton",
        size_cm: (60.0, 25.0, 60.0),
        weight_kg: 45.0,
        image: "/objects/beton_elem.jpg",
    },
    Seed {
        id: "D9L4S2",
        name: "Beton járólap",
        description: "Egyszerű beton járólap.",
        category: ObjectCategory::Waste,
        at: (46.8, 64.8),
        cost: 120,
        cost_unit: "Ft/db",
        color: "szürke",
        material: "beton",
        size_cm: (30.0, 5.0, 30.0),
        weight_kg: 10.0,
        image: "/objects/beton_jarolap.jpg",
    },
    Seed {
        id: "E5R7P1",
        name: "Beton kerti garnitúra",
        description: "2 U alakú beton pad és egy négyszögletes beton asztal.",
        category: ObjectCategory::Structure,
        at: (36.0, 64.0),
        cost: 149_000,
        cost_unit: "Ft",
        color: "szürke",
        material: "beton",
        size_cm: (350.0, 80.0, 220.0),
        weight_kg: 1050.0,
        image: "/objects/beton_kerti_garnitura.jpg",
    },
    Seed {
        id: "F6Q3N8",
        name: "Beton kocka",
        description: "Beton kocka, közepén acél rúd csonkkal.",
        category: ObjectCategory::Waste,
        at: (35.0, 56.0),
        cost: 1_500,
        cost_unit: "Ft",
        color: "szürke",
        material: "beton",
        size_cm: (60.0, 60.0, 60.0),
        weight_kg: 50.0,
        image: "/objects/beton_kocka.jpg",
    },
    Seed {
        id: "G2M9V4",
        name: "Beton villanyoszlop",
        description: "Középfeszültségű hálózat vasalt beton oszlopa.",
        category: ObjectCategory::Structure,
        at: (40.0, 33.0),
        cost: 22_000,
        cost_unit: "Ft",
        color: "szürke",
        material: "beton",
        size_cm: (35.0, 600.0, 35.0),
        weight_kg: 750.0,
        image: "/objects/beton_villanyoszlop.jpg",
    },
    Seed {
        id: "H1X7K5",
        name: "Betontörmelék (kitermelendő)",
        description: "Az egykori uszoda egyik medencéje bontásából származó betontörmelék.",
        category: ObjectCategory::Waste,
        at: (54.0, 60.0),
        cost: 100,
        cost_unit: "Ft/kg",
        color: "szürke",
        material: "beton",
        size_cm: (0.0, 0.0, 15.0),
        weight_kg: 12000.0,
        image: "/objects/betontormelek_kitermelendo.jpg",
    },
    Seed {
        id: "J4C6D9",
        name: "Fa kerítésoszlop",
        description: "Vörösre lakkozott fa kerítésoszlop a kemping területén.",
        category: ObjectCategory::Structure,
        at: (58.2, 22.5),
        cost: 5_490,
        cost_unit: "Ft/db",
        color: "téglavörös",
        material: "fa",
        size_cm: (15.0, 200.0, 15.0),
        weight_kg: 13.0,
        image: "/objects/fa_keritesoszlop.jpg",
    },
    Seed {
        id: "K8P2L7",
        name: "Fém állvány",
        description: "Ismeretlen rendeltetésű fém állvány.",
        category: ObjectCategory::Object,
        at: (46.5, 62.0),
        cost: 29_000,
        cost_unit: "Ft",
        color: "fehér",
        material: "fém",
        size_cm: (150.0, 200.0, 60.0),
        weight_kg: 39.0,
        image: "/objects/fem_allvany.jpg",
    },
    Seed {
        id: "L3Z9A2",
        name: "Fém kerítéselem",
        description: "Zöldre lakkozott fém kerítéselem. Valószínűleg egy kapuhoz tartozott.",
        category: ObjectCategory::Object,
        at: (48.3, 68.0),
        cost: 10_000,
        cost_unit: "Ft",
        color: "zöld",
        material: "fém",
        size_cm: (140.0, 190.0, 3.0),
        weight_kg: 27.0,
        image: "/objects/fem_kerites_elem.jpg",
    },
    Seed {
        id: "M7N1R6",
        name: "Fém kerítéselem (hosszú)",
        description: "Zöldre lakkozott hosszú fém kerítéselem. Valószínűleg egy kapuhoz tartozott.",
        category: ObjectCategory::Object,
        at: (49.5, 63.0),
        cost: 30_000,
        cost_unit: "Ft",
        color: "zöld",
        material: "fém",
        size_cm: (480.0, 190.0, 3.0),
        weight_kg: 62.0,
        image: "/objects/fem_kerites_elem_hosszu.jpg",
    },
    Seed {
        id: "N5V8E3",
        name: "Fém kerítéskapu",
        description: "Zöldre lakkozott fém kerítéskapu a csónakház hátsó bejáratáról.",
        category: ObjectCategory::Object,
        at: (57.6, 53.0),
        cost: 26_000,
        cost_unit: "Ft",
        color: "zöld",
        material: "fém",
        size_cm: (340.0, 190.0, 3.0),
        weight_kg: 32.0,
        image: "/objects/fem_kerites_kapu.jpg",
    },
    Seed {
        id: "P2H6Q8",
        name: "Fém kerítésoszlop (sarok)",
        description: "Zöldre lakkozott fém kerítésoszlop a kerítés sarkán.",
        category: ObjectCategory::Object,
        at: (52.0, 68.0),
        cost: 8_000,
        cost_unit: "Ft",
        color: "zöld",
        material: "fém",
        size_cm: (5.0, 300.0, 5.0),
        weight_kg: 14.0,
        image: "/objects/fem_kerites_oszlop_sarok.jpg",
    },
    Seed {
        id: "Q9D3S4",
        name: "Fém pózna",
        description: "Zöldre festett fém pózna, valószínűleg világításhoz.",
        category: ObjectCategory::Object,
        at: (52.2, 63.1),
        cost: 18_000,
        cost_unit: "Ft",
        color: "zöld",
        material: "fém",
        size_cm: (8.0, 350.0, 8.0),
        weight_kg: 18.0,
        image: "/objects/fem_pozna.jpg",
    },
    Seed {
        id: "R1K8B7",
        name: "Hangulatvilágítás",
        description: "Glóbuszt imitáló hangulatvilágítás LED izzókkal.",
        category: ObjectCategory::Object,
        at: (39.0, 56.0),
        cost: 3_750,
        cost_unit: "Ft",
        color: "fekete",
        material: "műanyag",
        size_cm: (12.0, 65.0, 12.0),
        weight_kg: 2.0,
        image: "/objects/hangulatvilagitas.jpg",
    },
    Seed {
        id: "S8L2C9",
        name: "Hirdetőtábla",
        description: "Fehérre festett fém hirdetőtábla, fém tartókonzollal.",
        category: ObjectCategory::Object,
        at: (39.2, 39.5),
        cost: 21_500,
        cost_unit: "Ft",
        color: "fehér",
        material: "fém",
        size_cm: (70.0, 185.0, 6.0),
        weight_kg: 19.0,
        image: "/objects/hirdetotabla.jpg",
    },
    Seed {
        id: "T4E7M1",
        name: "Hőszigetelés",
        description: "Szálas hőszigetelő anyag.",
        category: ObjectCategory::Waste,
        at: (49.6, 64.5),
        cost: 500,
        cost_unit: "Ft/m3",
        color: "sárga",
        material: "kőzetgyapot",
        size_cm: (0.0, 0.0, 10.0),
        weight_kg: 2100.0,
        image: "/objects/hoszigeteles.jpg",
    },
    Seed {
        id: "U6P9F1",
        name: "Hullámlemez darab",
        description: "Üvegszál erősítésű epoxi gyantából készült hullámlemez tetőfedés egy \
            darabja.",
        category: ObjectCategory::Waste,
        at: (47.9, 65.2),
        cost: 700,
        cost_unit: "Ft",
        color: "áttetsző sárga",
        material: "üvegszál + epoxi",
        size_cm: (25.0, 16.0, 6.0),
        weight_kg: 0.2,
        image: "/objects/hullamlemez_darab_g.png",
    },
    Seed {
        id: "U6P9F2",
        name: "Hullámlemez fedés",
        description: "Üvegszál erősítésű epoxi gyantából készült hullámlemez tetőfedés.",
        category: ObjectCategory::Structure,
        at: (49.4, 65.2),
        cost: 1_500,
        cost_unit: "Ft/m2",
        color: "áttetsző sárga",
        material: "üvegszál + epoxi",
        size_cm: (0.0, 0.0, 6.0),
        weight_kg: 1970.0,
        image: "/objects/hullamlemez_fedes.jpg",
    },
    Seed {
        id: "V3N5H8",
        name: "I-tartó",
        description: "Acélból készült I-tartó szerkezet.",
        category: ObjectCategory::Structure,
        at: (46.5, 63.0),
        cost: 12_000,
        cost_unit: "Ft/m",
        color: "szürke",
        material: "acél",
        size_cm: (12.0, 18.0, 300.0),
        weight_kg: 85.0,
        image: "/objects/i_tarto.jpg",
    },
    Seed {
        id: "W1C4K6",
        name: "Ivókút",
        description: "Terméskőből készült kétoldalú ivókút.",
        category: ObjectCategory::Structure,
        at: (51.0, 67.0),
        cost: 50_000,
        cost_unit: "Ft",
        color: "szürke",
        material: "terméskő",
        size_cm: (75.0, 120.0, 60.0),
        weight_kg: 350.0,
        image: "/objects/ivokut.jpg",
    },
    Seed {
        id: "X9H2L3",
        name: "Kandeláber",
        description: "Bézsszínűre festett kandeláber világítótesttel.",
        category: ObjectCategory::Object,
        at: (41.0, 58.0),
        cost: 32_000,
        cost_unit: "Ft",
        color: "bézs",
        material: "fém",
        size_cm: (15.0, 320.0, 15.0),
        weight_kg: 42.0,
        image: "/objects/kandelaber.jpg",
    },
    Seed {
        id: "Y5D8P4",
        name: "Lépcsős biztosítószekrény és hitéleti hely",
        description: "Áramhálózati kapcsolószekrény az árvízszint fölé helyezve beton \
            posztamensen, 3 lépcsőfokkal megközelíthető módon.",
        category: ObjectCategory::Structure,
        at: (39.0, 68.3),
        cost: 120_000,
        cost_unit: "Ft",
        color: "szürke",
        material: "beton",
        size_cm: (80.0, 150.0, 120.0),
        weight_kg: 480.0,
        image: "/objects/lepcsos_biztosito_szekreny_es_hiteleti_hely.jpg",
    },
    Seed {
        id: "Z7M1Q9",
        name: "Minigolf pálya",
        description: "3 domborból álló minigolf pálya műanyag szegéllyel.",
        category: ObjectCategory::Structure,
        at: (37.0, 67.0),
        cost: 210_000,
        cost_unit: "Ft",
        color: "vörösesbarna",
        material: "beton + műanyag",
        size_cm: (75.0, 330.0, 15.0),
        weight_kg: 150.0,
        image: "/objects/minigolf_palya.jpg",
    },
    Seed {
        id: "A9K3F1",
        name: "Műanyag zsák",
        description: "Fehér színű műanyagzsák. Valószínűleg az árvíz elleni védekezéshez \
            használták.",
        category: ObjectCategory::Waste,
        at: (42.0, 66.0),
        cost: 10,
        cost_unit: "Ft/db",
        color: "fehér",
        material: "műanyag",
        size_cm: (60.0, 40.0, 0.01),
        weight_kg: 0.1,
        image: "/objects/muanyag_zsak.jpg",
    },
    Seed {
        id: "B4L7C2",
        name: "Pad",
        description: "Fehérre festett beton támaszokon nyugvó fa pad. A fa részek vörösre \
            vannak festve.",
        category: ObjectCategory::Object,
        at: (60.0, 35.0),
        cost: 25_000,
        cost_unit: "Ft",
        color: "fehér + vörös",
        material: "beton + fa",
        size_cm: (200.0, 70.0, 45.0),
        weight_kg: 80.0,
        image: "/objects/pad.jpg",
    },
    Seed {
        id: "C8D1V6",
        name: "Plázsbútor",
        description: "Egy pad közepén fa oszlopra erősített csirkeháló, kör alakú fém abroncson.",
        category: ObjectCategory::Object,
        at: (61.0, 43.0),
        cost: 16_000,
        cost_unit: "Ft",
        color: "vörös",
        material: "fa + fém + drót",
        size_cm: (180.0, 190.0, 30.0),
        weight_kg: 27.0,
        image: "/objects/plazsbutor.jpg",
    },
    Seed {
        id: "R21VB3",
        name: "Pozdorja lap",
        description: "Kékre mázolt pozdorja lap, valószínűleg ajtó része lehetett.",
        category: ObjectCategory::Waste,
        at: (47.3, 66.5),
        cost: 980,
        cost_unit: "Ft",
        color: "kék",
        material: "fa",
        size_cm: (28.0, 28.0, 0.8),
        weight_kg: 1.0,
        image: "/objects/pozdorja_lap_g.png",
    },
    Seed {
        id: "D6Q9H3",
        name: "Pózna",
        description: "Félbevágott villanypózna beton talppal.",
        category: ObjectCategory::Structure,
        at: (36.0, 52.0),
        cost: 12_000,
        cost_unit: "Ft",
        color: "szürke + barna",
        material: "beton + fa",
        size_cm: (50.0, 210.0, 35.0),
        weight_kg: 80.0,
        image: "/objects/pozna.jpg",
    },
    Seed {
        id: "E2M5K8",
        name: "Raklap",
        description: "Fa szabvány raklap.",
        category: ObjectCategory::Waste,
        at: (61.3, 45.0),
        cost: 1_000,
        cost_unit: "Ft",
        color: "barna",
        material: "fa",
        size_cm: (120.0, 15.0, 80.0),
        weight_kg: 15.0,
        image: "/objects/raklap.jpg",
    },
    Seed {
        id: "F7P1L9",
        name: "Kis stég",
        description: "Fa deszkákból készült kis stég.",
        category: ObjectCategory::Object,
        at: (61.3, 54.0),
        cost: 30_000,
        cost_unit: "Ft",
        color: "barna",
        material: "fa",
        size_cm: (150.0, 20.0, 250.0),
        weight_kg: 40.0,
        image: "/objects/steg_kicsi.jpg",
    },
    Seed {
        id: "G3H8D4",
        name: "Nagy stég",
        description: "Fa deszkákból készült nagy stég. Téglalap alakú stéghez kis rámpa vezet.",
        category: ObjectCategory::Object,
        at: (61.6, 57.0),
        cost: 60_000,
        cost_unit: "Ft",
        color: "barna",
        material: "fa",
        size_cm: (300.0, 20.0, 250.0),
        weight_kg: 80.0,
        image: "/objects/steg_nagy.jpg",
    },
    Seed {
        id: "H9L2S5",
        name: "Szellőző tégla",
        description: "Szellőző tégla, amely lehetővé teszi a levegő áramlását az épületben.",
        category: ObjectCategory::Structure,
        at: (46.3, 67.0),
        cost: 450,
        cost_unit: "Ft",
        color: "fehér",
        material: "kerámia",
        size_cm: (30.0, 30.0, 10.0),
        weight_kg: 1.2,
        image: "/objects/szellozotegla.jpg",
    },
    Seed {
        id: "J5C9K1",
        name: "Szemetes",
        description: "Kültéri szemetes edény.",
        category: ObjectCategory::Object,
        at: (42.0, 33.0),
        cost: 8_000,
        cost_unit: "Ft",
        color: "szürke",
        material: "fém",
        size_cm: (50.0, 100.0, 50.0),
        weight_kg: 8.0,
        image: "/objects/szemetes.jpg",
    },
    Seed {
        id: "K1M4V7",
        name: "Terelő bója",
        description: "Rikító narancssárga terelő bója, fehér csíkkal.",
        category: ObjectCategory::Object,
        at: (31.0, 34.5),
        cost: 2_800,
        cost_unit: "Ft",
        color: "narancssárga + fehér",
        material: "műanyag",
        size_cm: (30.0, 50.0, 30.0),
        weight_kg: 0.8,
        image: "/objects/terelo_boja.jpg",
    },
    Seed {
        id: "L8P2H3",
        name: "Terméskő",
        description: "Több darab természetes formájú terméskő.",
        category: ObjectCategory::Waste,
        at: (47.0, 74.0),
        cost: 12,
        cost_unit: "Ft/kg",
        color: "szürke",
        material: "kő",
        size_cm: (80.0, 40.0, 50.0),
        weight_kg: 250.0,
        image: "/objects/termesko.jpg",
    },
    Seed {
        id: "M2D7Q9",
        name: "Tűzcsap",
        description: "Szabvány tűzcsap piros színben.",
        category: ObjectCategory::Object,
        at: (49.0, 75.0),
        cost: 15_000,
        cost_unit: "Ft",
        color: "piros",
        material: "fém",
        size_cm: (20.0, 50.0, 20.0),
        weight_kg: 15.0,
        image: "/objects/tuzcsap.jpg",
    },
    Seed {
        id: "N6H1L4",
        name: "Ülőgarnitúra",
        description: "Fa deszkákból és oszlopokból készült egyszerű ülőgarnitúra.",
        category: ObjectCategory::Structure,
        at: (61.3, 67.0),
        cost: 20_000,
        cost_unit: "Ft",
        color: "barna",
        material: "fa",
        size_cm: (300.0, 50.0, 150.0),
        weight_kg: 40.0,
        image: "/objects/ulogarnitura.jpg",
    },
    Seed {
        id: "P3K9F6",
        name: "Üveglap",
        description: "Sima üveglap, élei csiszoltak.",
        category: ObjectCategory::Waste,
        at: (43.0, 51.0),
        cost: 100,
        cost_unit: "Ft/m2",
        color: "átlátszó",
        material: "üveg",
        size_cm: (0.0, 0.0, 0.5),
        weight_kg: 11.0,
        image: "/objects/uveglap.jpg",
    },
    Seed {
        id: "Q7M2D8",
        name: "Világítószerkezet",
        description: "LED reflektorból, fa lécből és ragasztószalagból készült világítószerkezet.",
        category: ObjectCategory::Object,
        at: (58.5, 66.5),
        cost: 5_000,
        cost_unit: "Ft",
        color: "barna",
        material: "fa + fém + műanyag",
        size_cm: (30.0, 20.0, 4.0),
        weight_kg: 3.0,
        image: "/objects/vilagitoszerkezet.jpg",
    },
    Seed {
        id: "R9H4C1",
        name: "Vízcsap és edény",
        description: "Szabvány kék vízcsap és egy öntöttvas edény alatta.",
        category: ObjectCategory::Object,
        at: (40.0, 45.0),
        cost: 7_000,
        cost_unit: "Ft",
        color: "kék + szürke",
        material: "fém",
        size_cm: (20.0, 50.0, 20.0),
        weight_kg: 10.0,
        image: "/objects/vizcsap_es_edeny.jpg",
    },
    Seed {
        id: "S3L8P5",
        name: "Vízköpő",
        description: "Fóliabádog vízköpő.",
        category: ObjectCategory::Structure,
        at: (49.4, 66.3),
        cost: 2_500,
        cost_unit: "Ft",
        color: "szürke",
        material: "fóliabádog",
        size_cm: (55.0, 25.0, 1.0),
        weight_kg: 1.0,
        image: "/objects/vizkopo.jpg",
    },
];
