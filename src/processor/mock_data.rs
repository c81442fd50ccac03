//! Placeholder outputs returned by [`super::MockProcessor`].

pub const TEXT_TRANSLATIONS: &[(&str, &str)] = &[
    (
        "en-sw",
        "Habari za haraka: Uchaguzi mkuu umefanyika leo na matokeo yanatarajiwa mapema.",
    ),
    (
        "sw-en",
        "Breaking news: The general election took place today and results are expected soon.",
    ),
    (
        "en-fr",
        "Nouvelles de dernière minute: L'élection générale a eu lieu aujourd'hui et les résultats sont attendus bientôt.",
    ),
    (
        "sw-fr",
        "Dernières nouvelles: L'élection générale a eu lieu aujourd'hui et les résultats sont attendus bientôt.",
    ),
];

pub const TRANSCRIPT: &str = "\
Today's press conference addressed several key issues affecting our community.
The mayor announced new infrastructure developments including road improvements
and the construction of a new community center. The budget allocation for these
projects has been approved by the city council. Citizens expressed concerns about
traffic congestion and requested more public transportation options. The mayor
assured residents that these concerns are being taken seriously and solutions
are being developed. The meeting concluded with a Q&A session where local
reporters asked about timeline and funding sources.";

pub const TRANSCRIPT_SWAHILI: &str = "\
Mkutano wa waandishi wa habari wa leo ulijadili masuala kadhaa muhimu yanayoathiri jamii yetu.
Meya alitangaza maendeleo mapya ya miundombinu ikiwa ni pamoja na uboreshaji wa barabara
na ujenzi wa kituo kipya cha kijamii. Ugavi wa bajeti kwa miradi hii umepitishwa na baraza la jiji.
Wananchi walionyesha wasiwasi kuhusu msongamano wa magari na kuomba zaidi ya vifaa vya usafiri wa umma.
Meya aliwahakikishia wakazi kwamba wasiwasi huu unachukuliwa kwa uzito na suluhu zinajadiliwa.";

pub const TRANSCRIPT_SUMMARY: &str = "\
Key Points Summary:
\u{2022} Mayor announced new infrastructure projects (roads, community center)
\u{2022} City council approved budget allocation
\u{2022} Citizens raised traffic congestion concerns
\u{2022} Public transportation improvements requested
\u{2022} Solutions being developed for community concerns
\u{2022} Q&A session covered project timelines and funding";

pub const SUMMARIES: &[(&str, &str)] = &[
    (
        "en-short",
        "The city council approved a new infrastructure development plan focusing on road improvements and public transportation.",
    ),
    (
        "en-medium",
        "The city council approved a comprehensive infrastructure development plan that includes major road improvements, construction of a new community center, and enhanced public transportation options. The budget allocation of $2.5 million has been secured for these projects. Citizens expressed support for the initiatives while raising concerns about construction timelines.",
    ),
    (
        "en-long",
        "During today's city council meeting, officials approved a comprehensive infrastructure development plan that will significantly impact the community over the next two years. The plan includes major road improvements on Main Street and Oak Avenue, construction of a state-of-the-art community center with recreational facilities, and the introduction of enhanced public transportation options including new bus routes. The total budget allocation of $2.5 million has been secured through a combination of federal grants and local funding. While citizens expressed strong support for these initiatives, they also raised important concerns about construction timelines and potential traffic disruptions. The mayor assured residents that all projects will be completed with minimal impact on daily life.",
    ),
    (
        "sw-short",
        "Baraza la jiji limeidhinisha mpango wa maendeleo ya miundombinu unaoonyesha uboreshaji wa barabara na usafiri wa umma.",
    ),
    (
        "sw-medium",
        "Baraza la jiji limeidhinisha mpango mkubwa wa maendeleo ya miundombinu unaojumuisha uboreshaji wa barabara, ujenzi wa kituo kipya cha kijamii, na uboreshaji wa huduma za usafiri wa umma. Mgao wa bajeti ya dola milioni 2.5 umehakikishwa kwa miradi hii. Wananchi walionyesha uunga mkono kwa miradi hii lakini pia walitoa wasiwasi kuhusu ratiba za ujenzi.",
    ),
    (
        "sw-long",
        "Katika mkutano wa leo wa baraza la jiji, maafisa walidhinisha mpango mkubwa wa maendeleo ya miundombinu ambao utaathiri jamii kwa kipindi cha miaka miwili ijayo. Mpango huu unajumuisha uboreshaji mkubwa wa barabara za Main Street na Oak Avenue, ujenzi wa kituo cha kijamii cha kisasa chenye vifaa vya burudani, na kuanzishwa kwa huduma bora za usafiri wa umma ikiwa ni pamoja na njia mpya za mabasi. Jumla ya mgao wa bajeti ya dola milioni 2.5 umehakikishwa kupitia mchanganyiko wa misaada ya shirikisho na ufupi wa ndani. Ingawa wananchi walionyesha uunga mkono mkubwa kwa miradi hii, pia walitoa wasiwasi muhimu kuhusu ratiba za ujenzi na uwezekano wa usumbufu wa magari.",
    ),
];

pub const OCR_TEXT: &str = "\
PRESS RELEASE
City Council Meeting Minutes
Date: December 15, 2024

AGENDA ITEMS DISCUSSED:

1. Infrastructure Development Plan
   - Road improvements on Main Street
   - New community center construction
   - Budget allocation: $2.5 million approved

2. Public Transportation Enhancement
   - Additional bus routes proposed
   - Citizens requested improved schedule
   - Implementation timeline: Q2 2025

3. Environmental Initiatives
   - Tree planting program expansion
   - Recycling center upgrades
   - Green energy transition planning

CITIZEN CONCERNS:
- Traffic congestion during construction
- Parking availability downtown
- Timeline transparency requested

NEXT MEETING: January 15, 2025, 7:00 PM
Location: City Hall Conference Room A

For more information, contact:
City Clerk Office
Phone: (555) 123-4567
Email: clerk@citycouncil.gov";

pub const OCR_TRANSLATION_SWAHILI: &str = "\
TAARIFA ZA VYOMBO VYA HABARI
Muhtasari wa Mkutano wa Baraza la Jiji
Tarehe: Desemba 15, 2024

MAMBO YALIYOJADILIWA:

1. Mpango wa Maendeleo ya Miundombinu
   - Uboreshaji wa barabara za Main Street
   - Ujenzi wa kituo kipya cha kijamii
   - Mgao wa bajeti: Dola milioni 2.5 umeidhinishwa

2. Uboreshaji wa Usafiri wa Umma
   - Njia za ziada za mabasi zimependekezwa
   - Wananchi waliomba ratiba bora
   - Ratiba ya utekelezaji: Robo ya 2, 2025

3. Miradi ya Mazingira
   - Upanuzi wa mpango wa kupanda miti
   - Uboreshaji wa kituo cha uchakataji
   - Upangaji wa mpito wa nishati safi

WASIWASI WA WANANCHI:
- Msongamano wa magari wakati wa ujenzi
- Upatikanaji wa maegesho ya magari mjini
- Uwazi wa ratiba ulioombwa

MKUTANO UJAO: Januari 15, 2025, Saa 1:00 jioni
Mahali: Chumba cha Mikutano A, Jumba la Jiji

Kwa maelezo zaidi, wasiliana na:
Ofisi ya Katibu wa Jiji
Simu: (555) 123-4567
Barua pepe: clerk@citycouncil.gov";

pub const OCR_TRANSLATION_FRENCH: &str = "\
COMMUNIQUÉ DE PRESSE
Procès-verbal de la Réunion du Conseil Municipal
Date: 15 décembre 2024

POINTS À L'ORDRE DU JOUR DISCUTÉS:

1. Plan de Développement des Infrastructures
   - Améliorations routières sur Main Street
   - Construction d'un nouveau centre communautaire
   - Allocation budgétaire: 2,5 millions de dollars approuvés

2. Amélioration des Transports Publics
   - Lignes de bus supplémentaires proposées
   - Les citoyens ont demandé un meilleur horaire
   - Calendrier de mise en œuvre: T2 2025

3. Initiatives Environnementales
   - Expansion du programme de plantation d'arbres
   - Améliorations du centre de recyclage
   - Planification de la transition énergétique verte

PRÉOCCUPATIONS DES CITOYENS:
- Congestion routière pendant la construction
- Disponibilité du stationnement au centre-ville
- Transparence du calendrier demandée

PROCHAINE RÉUNION: 15 janvier 2025, 19h00
Lieu: Salle de conférence A de l'Hôtel de Ville";

pub const OCR_SUMMARY: &str = "\
KEY POINTS FROM CITY COUNCIL MEETING:

\u{2022} Infrastructure Plan: $2.5M approved for road improvements and community center
\u{2022} Public Transit: New bus routes proposed for Q2 2025 implementation
\u{2022} Environmental Focus: Tree planting expansion and recycling upgrades planned
\u{2022} Citizen Concerns: Traffic congestion and parking availability during construction
\u{2022} Next Meeting: January 15, 2025 at City Hall

IMPACT: Significant community improvements planned with citizen input considered.";

pub fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
