//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Fixed vocabularies personas are drawn from

/// An industry with the roles found in it and the idea keywords that count as a match on it.
#[derive(Debug, Clone, Copy)]
pub struct Industry {
    pub name: &'static str,
    pub roles: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub static INDUSTRIES: &[Industry] = &[
    Industry {
        name: "Technology",
        roles: &[
            "Software Engineer",
            "Product Manager",
            "CTO",
            "Data Scientist",
            "DevOps Engineer",
            "UX Designer",
        ],
        keywords: &["tech", "software", "app", "platform", "saas", "cloud", "digital", "ai"],
    },
    Industry {
        name: "Healthcare",
        roles: &[
            "Doctor",
            "Nurse",
            "Physician",
            "Hospital Administrator",
            "Pharmacist",
            "Medical Researcher",
        ],
        keywords: &["health", "medical", "doctor", "clinic", "patient", "hospital", "nurse"],
    },
    Industry {
        name: "Finance",
        roles: &[
            "Financial Analyst",
            "Accountant",
            "Investment Banker",
            "CFO",
            "Risk Manager",
        ],
        keywords: &["finance", "bank", "payment", "invest", "money", "fintech", "insurance"],
    },
    Industry {
        name: "Education",
        roles: &[
            "Teacher",
            "Professor",
            "School Principal",
            "Instructional Designer",
            "Tutor",
        ],
        keywords: &["education", "school", "student", "learn", "teach", "course", "university"],
    },
    Industry {
        name: "Retail",
        roles: &[
            "Store Manager",
            "Merchandiser",
            "E-commerce Manager",
            "Buyer",
            "Sales Associate",
        ],
        keywords: &["retail", "shop", "store", "ecommerce", "shopping", "checkout"],
    },
    Industry {
        name: "Manufacturing",
        roles: &[
            "Plant Manager",
            "Process Engineer",
            "Quality Inspector",
            "Supply Chain Manager",
            "Operations Director",
        ],
        keywords: &["factory", "manufacturing", "supply", "production", "industrial"],
    },
    Industry {
        name: "Marketing",
        roles: &[
            "Marketing Manager",
            "Brand Strategist",
            "Content Creator",
            "Growth Lead",
            "Copywriter",
        ],
        keywords: &["marketing", "brand", "advertising", "campaign", "influencer"],
    },
    Industry {
        name: "Hospitality",
        roles: &[
            "Hotel Manager",
            "Chef",
            "Event Planner",
            "Travel Agent",
            "Restaurant Owner",
        ],
        keywords: &["hotel", "travel", "restaurant", "booking", "tourism", "guest"],
    },
    Industry {
        name: "Logistics",
        roles: &[
            "Fleet Manager",
            "Logistics Coordinator",
            "Warehouse Supervisor",
            "Dispatcher",
        ],
        keywords: &["logistics", "delivery", "shipping", "fleet", "warehouse", "transport"],
    },
    Industry {
        name: "Energy",
        roles: &[
            "Energy Analyst",
            "Solar Installer",
            "Sustainability Officer",
            "Grid Engineer",
        ],
        keywords: &["energy", "solar", "climate", "green", "carbon", "battery"],
    },
    Industry {
        name: "Real Estate",
        roles: &[
            "Real Estate Agent",
            "Property Manager",
            "Architect",
            "Mortgage Broker",
        ],
        keywords: &["property", "housing", "rent", "tenant", "mortgage", "building"],
    },
    Industry {
        name: "Legal",
        roles: &["Lawyer", "Paralegal", "Compliance Officer", "Legal Counsel"],
        keywords: &["legal", "law", "contract", "compliance", "lawyer"],
    },
    Industry {
        name: "Media",
        roles: &["Journalist", "Video Producer", "Podcast Host", "Editor"],
        keywords: &["media", "news", "video", "podcast", "streaming"],
    },
    Industry {
        name: "Agriculture",
        roles: &["Farmer", "Agronomist", "Farm Manager"],
        keywords: &["farm", "agriculture", "crop", "harvest", "livestock"],
    },
];

/// Keywords that count as a match on the named industry. Unknown industries have none.
pub fn industry_keywords(name: &str) -> &'static [&'static str] {
    INDUSTRIES
        .iter()
        .find(|industry| industry.name.eq_ignore_ascii_case(name))
        .map(|industry| industry.keywords)
        .unwrap_or(&[])
}

pub static INTERESTS: &[&str] = &[
    "ai",
    "automation",
    "sustainability",
    "fintech",
    "health",
    "fitness",
    "gaming",
    "education",
    "travel",
    "ecommerce",
    "blockchain",
    "cloud",
    "security",
    "analytics",
    "design",
    "marketing",
    "productivity",
    "remote work",
    "scheduling",
    "mobile",
    "social media",
    "music",
    "food",
    "robotics",
    "energy",
    "real estate",
    "privacy",
    "open source",
    "wearables",
    "parenting",
];

pub static PAIN_POINTS: &[&str] = &[
    "high costs",
    "time management",
    "legacy systems",
    "data silos",
    "hiring talent",
    "regulatory compliance",
    "customer churn",
    "slow processes",
    "information overload",
    "security risks",
    "limited budget",
    "poor tooling",
    "communication gaps",
    "burnout",
    "scaling operations",
    "manual paperwork",
];

pub static GOALS: &[&str] = &[
    "grow revenue",
    "save time",
    "improve work-life balance",
    "reduce costs",
    "automate workflows",
    "learn new skills",
    "expand internationally",
    "improve customer experience",
    "build a strong team",
    "launch new products",
    "increase efficiency",
    "reduce risk",
    "go paperless",
    "make better decisions",
];

pub static FIRST_NAMES: &[&str] = &[
    "Amara", "Liam", "Sofia", "Kenji", "Priya", "Mateo", "Chloe", "Omar", "Yuki", "Noah",
    "Fatima", "Lucas", "Ingrid", "Arjun", "Zanele", "Diego", "Mei", "Elias", "Aisha", "Tomasz",
    "Camila", "Jonas", "Leila", "Hiro", "Grace", "Kwame", "Elena", "Rafael", "Nadia", "Samuel",
    "Hana", "Emeka", "Olivia", "Ravi", "Isabela", "Finn", "Sara", "Minh", "Chiara", "Daniel",
];

pub static LAST_NAMES: &[&str] = &[
    "Okafor", "Smith", "Rossi", "Tanaka", "Sharma", "García", "Martin", "Haddad", "Sato",
    "Johnson", "Khan", "Silva", "Andersson", "Patel", "Dlamini", "López", "Chen", "Müller",
    "Mensah", "Kowalski", "Fernández", "Schmidt", "Rahimi", "Kim", "Brown", "Boateng",
    "Ivanova", "Costa", "Nguyen", "Cohen", "Dubois", "Murphy", "Wang", "Mwangi", "Novak",
];

/// Genders with their relative sampling weights.
pub static GENDERS: &[(&str, u32)] = &[("female", 48), ("male", 48), ("non-binary", 4)];
