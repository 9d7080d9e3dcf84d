//! Content catalog: the literal lists, records, and tree behind every page.
//!
//! Everything here is static, defined at startup, and never mutated. Pages
//! iterate the catalog but hold no identity beyond array position.

use serde::Serialize;

// =============================================================================
// COMPANY & CONTACT
// =============================================================================

pub const COMPANY_NAME: &str = "Stanhole Trading & Projects";
pub const COMPANY_LEGAL_NAME: &str = "Stanhole Trading and Projects (Pty) Ltd";

pub const FOOTER_BLURB: &str = "Your trusted partner in Electrical & Mechanical Solutions. \
We are committed to providing the highest level of services and ensuring every client is well served.";

pub const HEAD_OFFICE_ADDRESS: &str = "61 Bergrivier Drive, Terenure, Kempton Park, 1619";
pub const PHONE_DISPLAY: &str = "+27 83 736 0290";
pub const PHONE_URL: &str = "tel:+27837360290";
pub const EMAIL_DISPLAY: &str = "info@stanhole.co.za";
pub const EMAIL_URL: &str = "mailto:info@stanhole.co.za";

/// Branch office entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Branch {
    pub town: &'static str,
    pub address: &'static str,
}

pub const BRANCHES: [Branch; 3] = [
    Branch {
        town: "Polokwane",
        address: "Stand No. 902 Makgodu, Moletji",
    },
    Branch {
        town: "Lephalale",
        address: "10074 Ditloung, Abbotspoort",
    },
    Branch {
        town: "Pretoria",
        address: "8989 Tamboville, Temba",
    },
];

/// Map embed target. Opaque to this crate: not parsed, not validated.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3583.504286161952!2d28.188849675971485!3d-26.082260959449836!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x1e951508825c0e7f%3A0x449852899451991a!2s61%20Bergrivier%20Dr%2C%20Terenure%2C%20Kempton%20Park%2C%201619%2C%20South%20Africa!5e0!3m2!1sen!2sus!4v1714574945417!5m2!1sen!2sus";

// Externally hosted placeholders, referenced by literal URL.
pub const HERO_IMAGE_URL: &str = "https://placehold.co/1920x1080/001f3f/75E6DA?text=Industrial+Site";
pub const TEAM_IMAGE_URL: &str = "https://placehold.co/600x400/333333/FFFFFF?text=Team+at+Work";
pub const SUBSTATION_IMAGE_URL: &str = "https://placehold.co/800x600/001f3f/AAAAAA?text=Substation";

// =============================================================================
// SERVICE LISTS
// =============================================================================

pub const ELECTRICAL_SERVICES: [&str; 16] = [
    "PLC Programming (SIEMANS, SCHNIEDER, ALLEN BRADLEY, ABB ETC)",
    "VSD and Soft Starter Programming and Installation",
    "Sensors, flow meters, scales Installation etc.",
    "Network Communication and Automation",
    "Transformer Service, maintenance, and installation",
    "Plant Maintenance and Repairs",
    "Switchgear services, inspection, and installation",
    "Building new Substation up to 11Kv and commission",
    "Installation and repair of MV and LV cables",
    "Termination and Jointing cables",
    "MCC and Substations refurbishment",
    "Installation of Substation fence",
    "Electrification of Rural and Urban areas",
    "Connection of prepaid and Conventional meters",
    "Issue Electrical COC single phase and three phase",
    "Air conditioner Service, Maintenance, Repairs and Installation",
];

pub const MECHANICAL_SERVICES: [&str; 7] = [
    "HVAC",
    "Air Conditioning",
    "Heat and Ventilation",
    "Fluid Mechanics",
    "Pumps and motors",
    "Crushers and Feeders",
    "Vibrating Screens and Screen Panels",
];

pub const INDUSTRIES: [&str; 7] = [
    "Mining",
    "Quarries",
    "Cement",
    "Ready Mix",
    "Commercial",
    "Industrial",
    "Residential",
];

pub const CORE_VALUES: [&str; 6] = [
    "Honesty",
    "Respect",
    "Trust",
    "Client Satisfaction",
    "Equal Opportunities",
    "Integrity",
];

// =============================================================================
// TEAM
// =============================================================================

/// Profiled team member.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub qualifications: &'static [&'static str],
}

pub const DIRECTOR: TeamMember = TeamMember {
    name: "Stanley Maphuti Mashita",
    role: "Director",
    qualifications: &[
        "National Diploma: Electrical Engineering (VUT)",
        "N4 Mechanical Engineering",
        "Section 13 Trade certificate (MQA)-Electrician",
        "Wireman's License (Installation Electrician - Three Phase)",
        "HT (Medium Voltage) certificate",
        "PLC Maintenance service 1,2&3",
    ],
};

/// Row in the human resource plan table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HrRow {
    pub role: &'static str,
    pub males: &'static str,
    pub females: &'static str,
    pub age_group: &'static str,
}

pub const HR_PLAN: [HrRow; 4] = [
    HrRow {
        role: "Senior Member",
        males: "2",
        females: "1",
        age_group: "30-35",
    },
    HrRow {
        role: "Professionals",
        males: "2",
        females: "1",
        age_group: "25-45",
    },
    HrRow {
        role: "Technician",
        males: "2",
        females: "-",
        age_group: "18-45",
    },
    HrRow {
        role: "Assistant",
        males: "4",
        females: "-",
        age_group: "18-40",
    },
];

// =============================================================================
// ORG CHART
// =============================================================================

/// Node in the company-structure tree.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrgNode {
    pub title: &'static str,
    pub name: Option<&'static str>,
    /// 1 for the leadership spine (highlighted border), 2 below it.
    pub level: u8,
    pub children: &'static [OrgNode],
}

impl OrgNode {
    /// Depth-first pre-order visit: every node exactly once, parent before
    /// all of its descendants. `depth` is 0 at the receiver.
    pub fn visit<F: FnMut(&OrgNode, usize)>(&self, f: &mut F) {
        self.visit_at(0, f);
    }

    fn visit_at<F: FnMut(&OrgNode, usize)>(&self, depth: usize, f: &mut F) {
        f(self, depth);
        for child in self.children {
            child.visit_at(depth + 1, f);
        }
    }

    /// Number of nodes in the subtree rooted here.
    pub fn count(&self) -> usize {
        let mut n = 0;
        self.visit(&mut |_, _| n += 1);
        n
    }
}

pub const ORG_CHART: OrgNode = OrgNode {
    title: "Managing Member",
    name: Some("Stanhole Trading & Projects (Pty) Ltd"),
    level: 1,
    children: &[OrgNode {
        title: "Chief Operations Officer",
        name: Some("(SM Mashita)"),
        level: 1,
        children: &[
            OrgNode {
                title: "Marketing Manager",
                name: Some("(S Moloto)"),
                level: 2,
                children: &[],
            },
            OrgNode {
                title: "General Manager",
                name: Some("(M Mokoena)"),
                level: 2,
                children: &[
                    OrgNode {
                        title: "Administration",
                        name: Some("(K Setho)"),
                        level: 2,
                        children: &[],
                    },
                    OrgNode {
                        title: "Electricians & Tech",
                        name: Some("(Multiple)"),
                        level: 2,
                        children: &[],
                    },
                ],
            },
            OrgNode {
                title: "Safety Officer",
                name: Some("(H Mphahlele)"),
                level: 2,
                children: &[],
            },
            OrgNode {
                title: "Managing Director",
                name: Some("(T Rasekganya)"),
                level: 2,
                children: &[OrgNode {
                    title: "Assistant",
                    name: Some("(Multiple)"),
                    level: 2,
                    children: &[],
                }],
            },
        ],
    }],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(ELECTRICAL_SERVICES.len(), 16);
        assert_eq!(MECHANICAL_SERVICES.len(), 7);
        assert_eq!(INDUSTRIES.len(), 7);
        assert_eq!(CORE_VALUES.len(), 6);
        assert_eq!(DIRECTOR.qualifications.len(), 6);
        assert_eq!(HR_PLAN.len(), 4);
    }

    #[test]
    fn test_catalog_literal_order() {
        assert_eq!(
            ELECTRICAL_SERVICES[0],
            "PLC Programming (SIEMANS, SCHNIEDER, ALLEN BRADLEY, ABB ETC)"
        );
        assert_eq!(
            ELECTRICAL_SERVICES[15],
            "Air conditioner Service, Maintenance, Repairs and Installation"
        );
        assert_eq!(MECHANICAL_SERVICES[0], "HVAC");
        assert_eq!(INDUSTRIES[6], "Residential");
    }

    #[test]
    fn test_org_chart_root_and_size() {
        assert_eq!(ORG_CHART.title, "Managing Member");
        assert_eq!(ORG_CHART.count(), 9);
    }

    #[test]
    fn test_org_chart_preorder_visits_each_node_once() {
        let mut titles = Vec::new();
        ORG_CHART.visit(&mut |node, _| titles.push(node.title));
        assert_eq!(
            titles,
            [
                "Managing Member",
                "Chief Operations Officer",
                "Marketing Manager",
                "General Manager",
                "Administration",
                "Electricians & Tech",
                "Safety Officer",
                "Managing Director",
                "Assistant",
            ]
        );
    }

    #[test]
    fn test_org_chart_depths() {
        let mut max_depth = 0;
        ORG_CHART.visit(&mut |_, depth| max_depth = max_depth.max(depth));
        assert_eq!(max_depth, 3);
    }

    #[test]
    fn test_single_node_tree() {
        let node = OrgNode {
            title: "Only",
            name: None,
            level: 1,
            children: &[],
        };
        assert_eq!(node.count(), 1);
        let mut seen = Vec::new();
        node.visit(&mut |n, depth| seen.push((n.title, depth)));
        assert_eq!(seen, [("Only", 0)]);
    }

    #[test]
    fn test_arbitrary_depth_tree() {
        // A deeper chain than the real data, to pin down that rendering
        // input is not bounded by the current chart's shape.
        const LEAF: OrgNode = OrgNode {
            title: "d4",
            name: None,
            level: 2,
            children: &[],
        };
        const D3: OrgNode = OrgNode {
            title: "d3",
            name: None,
            level: 2,
            children: &[LEAF, LEAF],
        };
        const D2: OrgNode = OrgNode {
            title: "d2",
            name: None,
            level: 2,
            children: &[D3],
        };
        const D1: OrgNode = OrgNode {
            title: "d1",
            name: None,
            level: 1,
            children: &[D2, D2, D2],
        };

        assert_eq!(D1.count(), 1 + 3 * (1 + 1 + 2));
        let mut first = None;
        D1.visit(&mut |n, _| {
            if first.is_none() {
                first = Some(n.title);
            }
        });
        assert_eq!(first, Some("d1"));
    }
}
