//! Built-in Tunis tourism knowledge pack.
//!
//! Static question/answer pairs used when no knowledge file is configured.
//! Order matters: position is the row key of both similarity indexes.

/// A static knowledge entry
pub struct PackEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

/// Built-in Tunis knowledge entries
pub const TUNIS_PACK: &[PackEntry] = &[
    // Lieux touristiques
    PackEntry {
        question: "Quels sont les principaux lieux touristiques à Tunis?",
        answer: "Les principaux lieux touristiques à Tunis incluent:\n- La Médina de Tunis (classée UNESCO)\n- Le site archéologique de Carthage\n- Le village de Sidi Bou Saïd\n- Le Musée National du Bardo\n- La Mosquée Zitouna\n- L'Avenue Habib Bourguiba",
        category: "lieux",
    },
    PackEntry {
        question: "Que voir dans la Médina de Tunis?",
        answer: "Dans la Médina de Tunis, vous pouvez visiter:\n- La Mosquée Zitouna (la plus grande mosquée de Tunis)\n- Les souks traditionnels (parfums, tissus, bijoux)\n- Dar Lasram et autres palais ottomans\n- Les médersas historiques\n- Les portes anciennes (Bab El Bhar, Bab Souika)\nC'est un labyrinthe fascinant de ruelles étroites!",
        category: "lieux",
    },
    PackEntry {
        question: "Comment visiter Carthage?",
        answer: "Pour visiter Carthage:\n- Prenez le TGM (train) depuis Tunis Marine jusqu'à Carthage Hannibal\n- Achetez un billet global pour tous les sites (environ 12 DT)\n- Sites principaux: Thermes d'Antonin, Théâtre romain, Tophet, Musée de Carthage\n- Comptez une demi-journée à une journée complète\n- Combinez avec Sidi Bou Saïd tout proche!",
        category: "lieux",
    },
    PackEntry {
        question: "Pourquoi visiter Sidi Bou Saïd?",
        answer: "Sidi Bou Saïd est célèbre pour:\n- Ses maisons blanches et bleues iconiques\n- Ses ruelles pavées pittoresques\n- La vue panoramique sur la Méditerranée\n- Le Café des Nattes (thé à la menthe et pignons)\n- Les galeries d'art et boutiques d'artisanat\n- L'ambiance bohème et artistique\nC'est l'un des plus beaux villages de Tunisie!",
        category: "lieux",
    },
    PackEntry {
        question: "Que voir au Musée du Bardo?",
        answer: "Le Musée National du Bardo abrite:\n- La plus grande collection de mosaïques romaines au monde\n- Des antiquités puniques et romaines\n- Des collections islamiques\n- Le célèbre baptistère de Dougga\n- Architecture magnifique dans un ancien palais beylical\nComptez 2-3 heures pour la visite. Fermé le lundi.",
        category: "lieux",
    },
    // Restaurants et gastronomie
    PackEntry {
        question: "Où manger à Tunis?",
        answer: "Bonnes adresses à Tunis:\n- Dar El Jeld (cuisine traditionnelle raffinée, Médina)\n- Le Baroque (cuisine fusion, La Marsa)\n- Chez Slah (poissons, La Goulette)\n- La Closerie (française, Lac de Tunis)\n- M'rabet (pâtisseries, Avenue Habib Bourguiba)\n- Essaraya (traditionnel, Gammarth)",
        category: "restaurants",
    },
    PackEntry {
        question: "Quelles spécialités tunisiennes goûter?",
        answer: "Spécialités incontournables:\n- Couscous (vendredi tradition)\n- Brik à l'œuf (feuille croustillante)\n- Tajine tunisien (différent du marocain)\n- Ojja (plat aux œufs épicé)\n- Lablabi (soupe de pois chiches)\n- Mechouia (salade grillée)\n- Makroudh et baklawa (pâtisseries)\n- Thé à la menthe et pignons",
        category: "gastronomie",
    },
    PackEntry {
        question: "Où manger des bons bricks?",
        answer: "Pour déguster d'excellents bricks:\n- M'rabet (Avenue Habib Bourguiba)\n- Dans les petits restaurants de la Médina\n- Chez Slah à La Goulette\n- Au marché central\nLe brik à l'œuf est le plus populaire, mais il existe aussi au thon, aux crevettes, et à la viande.",
        category: "restaurants",
    },
    // Transports
    PackEntry {
        question: "Comment se déplacer à Tunis?",
        answer: "Moyens de transport à Tunis:\n- Métro léger (5 lignes, bon marché)\n- TGM: train de banlieue vers La Marsa/Carthage\n- Bus: réseau étendu mais souvent bondé\n- Taxis: jaunes (compteur) ou louages blancs (collectifs)\n- Uber et Bolt: disponibles\n- Location de voiture: pour plus de liberté\nLe métro est le plus pratique pour le centre-ville.",
        category: "transport",
    },
    PackEntry {
        question: "Comment aller de l'aéroport au centre-ville?",
        answer: "De l'aéroport Tunis-Carthage au centre:\n- Taxi officiel: 10-15 DT (négociez avant), 20-30 min\n- Uber/Bolt: environ 10 DT\n- Bus ligne 35: très économique mais lent\n- Navette privée: réserver à l'avance\nL'aéroport est à seulement 8 km du centre-ville.",
        category: "transport",
    },
    // Histoire et culture
    PackEntry {
        question: "Quelle est l'histoire de Carthage?",
        answer: "Carthage, fondée par les Phéniciens en 814 av. J.-C., fut:\n- Une puissante cité-état maritime et commerciale\n- Rivale de Rome (Guerres puniques)\n- Patrie du célèbre général Hannibal\n- Détruite par Rome en 146 av. J.-C.\n- Reconstruite comme capitale romaine d'Afrique\n- Aujourd'hui site archéologique UNESCO\nUne histoire de 3000 ans!",
        category: "histoire",
    },
    PackEntry {
        question: "Pourquoi la Médina est-elle classée UNESCO?",
        answer: "La Médina de Tunis est classée UNESCO car:\n- Fondée au 7ème siècle (époque islamique)\n- Architecture arabo-musulmane préservée\n- Plus de 700 monuments historiques\n- Souks et artisanat traditionnel vivant\n- Exemple exceptionnel de ville arabe médiévale\n- Centre culturel et religieux important\nC'est un patrimoine mondial depuis 1979.",
        category: "histoire",
    },
    // Informations pratiques
    PackEntry {
        question: "Quelle est la meilleure période pour visiter Tunis?",
        answer: "Meilleures périodes pour visiter Tunis:\n- Printemps (mars-mai): temps doux, 18-25°C, idéal\n- Automne (septembre-novembre): agréable, moins de touristes\n- Été (juin-août): chaud (30-35°C), animation, plages\n- Hiver (décembre-février): doux mais pluvieux\nÉvitez juillet-août si vous n'aimez pas la chaleur intense.",
        category: "pratique",
    },
    PackEntry {
        question: "Où dormir à Tunis?",
        answer: "Options d'hébergement:\n- Centre-ville: proche attractions, vie urbaine\n- La Marsa/Gammarth: bord de mer, calme, résidentiel\n- Sidi Bou Saïd: charme, vue, romantique\n- Médina: authentique, riads traditionnels\nBudget: auberges 15-30€, hôtels moyens 40-80€, luxe 100€+\nRéservez à l'avance en haute saison!",
        category: "pratique",
    },
    PackEntry {
        question: "Tunis est-elle sûre pour les touristes?",
        answer: "Tunis est généralement sûre pour les touristes:\n- Centre-ville et zones touristiques bien sécurisés\n- Précautions habituelles: attention pickpockets (Médina, transports)\n- Éviter ruelles isolées la nuit\n- Respecter les coutumes locales\n- Police touristique disponible\nLes Tunisiens sont accueillants et hospitaliers!",
        category: "pratique",
    },
    // Itinéraires
    PackEntry {
        question: "Que faire en une journée à Tunis?",
        answer: "Itinéraire d'une journée:\nMatin:\n- Médina de Tunis et Mosquée Zitouna (2h)\n- Souks et shopping artisanal (1h)\nMidi:\n- Déjeuner dans la Médina\nAprès-midi:\n- Musée du Bardo (2h)\n- Avenue Habib Bourguiba (balade)\nSoir:\n- Dîner à Sidi Bou Saïd + coucher de soleil\nAlternative: remplacer Bardo par Carthage",
        category: "itineraire",
    },
    PackEntry {
        question: "Que faire en un weekend à Tunis?",
        answer: "Programme weekend (2-3 jours):\nJour 1:\n- Matin: Médina + Mosquée Zitouna\n- Après-midi: Musée du Bardo\n- Soir: Avenue Bourguiba\n\nJour 2:\n- Matin: Site de Carthage (ruines romaines)\n- Après-midi: Sidi Bou Saïd (village bleu et blanc)\n- Soir: Dîner fruits de mer à La Goulette\n\nJour 3 (optionnel):\n- Plage à Gammarth ou La Marsa\n- Shopping souvenirs",
        category: "itineraire",
    },
    // Shopping
    PackEntry {
        question: "Que ramener de Tunis comme souvenir?",
        answer: "Souvenirs typiques de Tunis:\n- Poterie et céramique de Nabeul\n- Tapis et kilims berbères\n- Chéchia (chapeau traditionnel rouge)\n- Bijoux en argent\n- Huile d'olive tunisienne\n- Épices (harissa, ras el hanout)\n- Savon d'Alep et huile d'argan\n- Cuir et babouches\nMarchandez dans les souks (30-50% du prix initial)!",
        category: "shopping",
    },
    // Plages
    PackEntry {
        question: "Où aller à la plage près de Tunis?",
        answer: "Plages proches de Tunis:\n- Gammarth: plage propre, restaurants, clubs privés\n- La Marsa: populaire, ambiance familiale\n- Carthage: petites criques tranquilles\n- Raoued: plus sauvage, moins fréquentée\n- Hammamet: à 1h, stations balnéaires\nL'eau est chaude de juin à septembre (22-26°C).",
        category: "plages",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pack_not_empty() {
        assert_eq!(TUNIS_PACK.len(), 19);
    }

    #[test]
    fn test_pack_questions_unique() {
        let questions: HashSet<_> = TUNIS_PACK.iter().map(|e| e.question).collect();
        assert_eq!(questions.len(), TUNIS_PACK.len());
    }

    #[test]
    fn test_pack_entries_complete() {
        for entry in TUNIS_PACK {
            assert!(!entry.question.trim().is_empty());
            assert!(!entry.answer.trim().is_empty());
            assert!(!entry.category.trim().is_empty());
        }
    }
}
