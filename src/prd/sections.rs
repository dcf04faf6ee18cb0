//! @acp:module "PRD Sections"
//! @acp:summary "Ordered table of section builders for the generated document"
//! @acp:domain prd
//! @acp:layer output
//!
//! Each builder is a pure function of a [`SectionContext`] and returns one
//! Markdown block ending in a newline. [`SECTIONS`] fixes the document order;
//! conditional sections carry their own inclusion check.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::format::{
    format_count, format_list, format_percent, format_target_users, format_value_list,
};
use super::record::InputRecord;
use super::rice::RiceInputs;
use super::types::{AiMlRequirements, DocumentMeta, Metric};

/// Everything a section builder may read
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub record: &'a InputRecord,
    pub meta: &'a DocumentMeta,
    pub date: NaiveDate,
}

impl SectionContext<'_> {
    fn feature_name(&self) -> String {
        self.record.text_or("feature_name", "[Feature Name]")
    }

    fn text_or(&self, key: &str, default: &str) -> String {
        self.record.text_or(key, default)
    }

    fn target_users(&self, default: &str) -> String {
        self.record
            .get("target_users")
            .map(format_target_users)
            .unwrap_or_else(|| default.to_string())
    }

    fn list_or(&self, key: &str, default: &[&str]) -> String {
        match self.record.get(key) {
            Some(value) => format_value_list(value),
            None => format_list(default),
        }
    }
}

/// Identifies a section of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Header,
    ExecutiveSummary,
    ProblemStatement,
    OpportunitySizing,
    SuccessMetrics,
    UserStories,
    FunctionalRequirements,
    TechnicalRequirements,
    AiMlSpecifications,
    UserExperience,
    RiskAssessment,
    LaunchPlan,
    StakeholderMatrix,
    Appendix,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::ExecutiveSummary => "executive_summary",
            SectionId::ProblemStatement => "problem_statement",
            SectionId::OpportunitySizing => "opportunity_sizing",
            SectionId::SuccessMetrics => "success_metrics",
            SectionId::UserStories => "user_stories",
            SectionId::FunctionalRequirements => "functional_requirements",
            SectionId::TechnicalRequirements => "technical_requirements",
            SectionId::AiMlSpecifications => "ai_ml_specifications",
            SectionId::UserExperience => "user_experience",
            SectionId::RiskAssessment => "risk_assessment",
            SectionId::LaunchPlan => "launch_plan",
            SectionId::StakeholderMatrix => "stakeholder_matrix",
            SectionId::Appendix => "appendix",
        }
    }

    /// Heading as it appears in the document
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Header => "PRD Header",
            SectionId::ExecutiveSummary => "Executive Summary",
            SectionId::ProblemStatement => "Problem Statement",
            SectionId::OpportunitySizing => "Opportunity Sizing",
            SectionId::SuccessMetrics => "Success Metrics",
            SectionId::UserStories => "User Stories",
            SectionId::FunctionalRequirements => "Functional Requirements",
            SectionId::TechnicalRequirements => "Technical Requirements",
            SectionId::AiMlSpecifications => "AI/ML Specifications",
            SectionId::UserExperience => "User Experience",
            SectionId::RiskAssessment => "Risk Assessment",
            SectionId::LaunchPlan => "Launch Plan",
            SectionId::StakeholderMatrix => "Stakeholder Matrix (RACI)",
            SectionId::Appendix => "Appendix",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type SectionBuilder = fn(&SectionContext<'_>) -> String;
pub type SectionFilter = fn(&InputRecord) -> bool;

/// @acp:summary "One entry of the section table"
#[derive(Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub build: SectionBuilder,
    /// `None` means the section is always emitted
    pub include_if: Option<SectionFilter>,
}

impl Section {
    const fn always(id: SectionId, build: SectionBuilder) -> Self {
        Self {
            id,
            build,
            include_if: None,
        }
    }

    const fn when(id: SectionId, build: SectionBuilder, include_if: SectionFilter) -> Self {
        Self {
            id,
            build,
            include_if: Some(include_if),
        }
    }

    pub fn includes(&self, record: &InputRecord) -> bool {
        self.include_if.map_or(true, |check| check(record))
    }

    pub fn is_conditional(&self) -> bool {
        self.include_if.is_some()
    }

    pub fn render(&self, ctx: &SectionContext<'_>) -> String {
        (self.build)(ctx)
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("id", &self.id)
            .field("conditional", &self.is_conditional())
            .finish()
    }
}

/// Document order
pub const SECTIONS: &[Section] = &[
    Section::always(SectionId::Header, header),
    Section::always(SectionId::ExecutiveSummary, executive_summary),
    Section::always(SectionId::ProblemStatement, problem_statement),
    Section::always(SectionId::OpportunitySizing, opportunity_sizing),
    Section::always(SectionId::SuccessMetrics, success_metrics),
    Section::always(SectionId::UserStories, user_stories),
    Section::always(SectionId::FunctionalRequirements, functional_requirements),
    Section::always(SectionId::TechnicalRequirements, technical_requirements),
    Section::when(
        SectionId::AiMlSpecifications,
        ai_ml_specifications,
        has_ai_ml_requirements,
    ),
    Section::always(SectionId::UserExperience, user_experience),
    Section::always(SectionId::RiskAssessment, risk_assessment),
    Section::always(SectionId::LaunchPlan, launch_plan),
    Section::always(SectionId::StakeholderMatrix, stakeholder_matrix),
    Section::always(SectionId::Appendix, appendix),
];

fn has_ai_ml_requirements(record: &InputRecord) -> bool {
    record.is_truthy("ai_ml_requirements")
}

// =============================================================================
// Builders
// =============================================================================

fn header(ctx: &SectionContext<'_>) -> String {
    let meta = ctx.meta;
    format!(
        r"# PRD: {feature}

**Document Version**: {version}  
**Last Updated**: {date}  
**Status**: {status}  
**Owner**: {owner}  
**Stakeholders**: {stakeholders}

---
",
        feature = ctx.feature_name(),
        version = meta.version,
        date = ctx.date.format("%B %d, %Y"),
        status = meta.status,
        owner = meta.owner,
        stakeholders = meta.stakeholders,
    )
}

fn executive_summary(ctx: &SectionContext<'_>) -> String {
    format!(
        r"## Executive Summary

### Overview
{feature} addresses the need for {problem} among {users}.

### Business Goals
{goals}

### Expected Impact
This feature is expected to reach {reach} of our user base and deliver {impact} in key metrics.

### The Ask
- **Engineering Resources**: [To be determined based on technical design]
- **Timeline**: [To be determined after estimation]
- **Dependencies**: [To be identified during planning]
",
        feature = ctx.feature_name(),
        problem = ctx.text_or("problem_statement", "improved user experience"),
        users = ctx.target_users("our users"),
        goals = ctx.list_or(
            "business_goals",
            &["Improve user engagement", "Drive revenue growth"]
        ),
        reach = ctx.text_or("reach_estimate", "a significant portion"),
        impact = ctx.text_or("impact_estimate", "meaningful improvements"),
    )
}

/// Jobs-to-be-Done framing
fn problem_statement(ctx: &SectionContext<'_>) -> String {
    format!(
        r"## Problem Statement

### Jobs-to-be-Done Framework

**When** users need to accomplish their goals,  
**They want** a solution that {problem},  
**So they can** achieve better outcomes and satisfaction.

### Current Experience
Users currently face the following challenges:
- Friction in current workflow
- Time-consuming manual processes
- Lack of intelligent assistance
- Suboptimal outcomes

### Desired Experience
With this feature, users will be able to:
- Accomplish tasks more efficiently
- Receive intelligent recommendations
- Make better-informed decisions
- Achieve superior outcomes

### Why Now?
- User research indicates strong demand
- Competitive pressure in the market
- Technical capabilities now available
- Strategic alignment with company vision
",
        problem = ctx.text_or(
            "problem_statement",
            "Users need a better way to accomplish their goals"
        ),
    )
}

fn opportunity_sizing(ctx: &SectionContext<'_>) -> String {
    let rice = RiceInputs::from_record(ctx.record);
    format!(
        r"## Opportunity Sizing

### Market Analysis
- **TAM** (Total Addressable Market): [Total potential users who could benefit]
- **SAM** (Serviceable Addressable Market): [Users we can realistically reach]
- **SOM** (Serviceable Obtainable Market): [Users we expect to capture in next 12 months]

### RICE Prioritization Score
- **Reach**: {reach} users affected per quarter
- **Impact**: {impact} improvement in key metrics
- **Confidence**: {confidence} confidence in estimates
- **Effort**: {effort} person-months

**RICE Score**: {score}

### Expected Business Impact
- **Revenue Impact**: [Projected increase in revenue]
- **User Growth**: [Expected new user acquisition]
- **Retention**: [Improvement in retention metrics]
- **Competitive Position**: [Improvement in market standing]
",
        reach = format_count(rice.reach),
        impact = format_percent(rice.impact, 1),
        confidence = format_percent(rice.confidence, 0),
        effort = rice.effort,
        score = format!("{:.1}", rice.score()),
    )
}

/// SMART metrics table
fn success_metrics(ctx: &SectionContext<'_>) -> String {
    format!(
        r"## Success Metrics

### Primary Metrics (North Star)
The primary metric we're optimizing for is **[Primary Metric Name]** because it best reflects the value delivered to users and the business.

### Key Performance Indicators

{metrics_table}

### Leading vs. Lagging Indicators
- **Leading Indicators**: Early signals of success (e.g., feature adoption rate)
- **Lagging Indicators**: Ultimate outcome measures (e.g., retention, revenue)

### Measurement Methodology
- **Data Collection**: [How data will be captured]
- **Analysis Cadence**: [How often metrics will be reviewed]
- **Reporting**: [Who receives metric updates and how often]
- **Thresholds**: [When to intervene if metrics underperform]
",
        metrics_table = metrics_table(ctx.record),
    )
}

fn metrics_table(record: &InputRecord) -> String {
    let metrics: Vec<Metric> = match record.get("success_metrics") {
        Some(Value::Array(items)) => items.iter().map(Metric::from_value).collect(),
        Some(other) => {
            tracing::warn!("success_metrics is not a list, rendering it as a single metric");
            vec![Metric::from_value(other)]
        }
        None => vec![Metric::user_engagement()],
    };

    let mut table = String::from(
        "| Metric | Baseline | Target | Timeline | Measurement Method |\n\
         |--------|----------|--------|----------|-------------------|\n",
    );
    for metric in &metrics {
        table.push_str(&metric.table_row());
        table.push('\n');
    }
    table
}

fn user_stories(ctx: &SectionContext<'_>) -> String {
    format!(
        r"## User Stories

### Primary User Flows

#### Story 1: [Core Feature Usage]
**As a** {users},  
**I want** to access this feature,  
**So that** I can accomplish my goals more effectively.

**Acceptance Criteria:**
- ✓ User can discover the feature from [entry point]
- ✓ User receives clear guidance on how to use the feature
- ✓ User can complete the primary action within [X] clicks
- ✓ User receives confirmation of successful completion
- ✓ User can undo or modify their action if needed

#### Story 2: [Secondary Feature Usage]
**As a** power user,  
**I want** advanced capabilities,  
**So that** I can optimize my workflow.

**Acceptance Criteria:**
- ✓ Advanced options are available but not overwhelming
- ✓ User can customize settings to their preferences
- ✓ User can save and reuse configurations
- ✓ User receives performance insights

### Edge Cases
- What happens when [edge case scenario]?
- How does the system handle [error condition]?
- What if user has [unusual permissions/data state]?
",
        users = ctx.target_users("user"),
    )
}

/// MoSCoW breakdown
fn functional_requirements(_: &SectionContext<'_>) -> String {
    FUNCTIONAL_REQUIREMENTS.to_string()
}

fn technical_requirements(ctx: &SectionContext<'_>) -> String {
    format!(
        r"## Technical Requirements

### Architecture
- **Frontend**: [Technology stack and frameworks]
- **Backend**: [Services, APIs, databases]
- **Infrastructure**: [Hosting, CDN, caching]
- **Third-Party Services**: [External dependencies]

### Performance Requirements
- **Response Time**: < 200ms for 95th percentile
- **Throughput**: Support X concurrent users
- **Availability**: 99.9% uptime SLA
- **Data Latency**: Real-time updates within 1 second

### Security & Privacy
- **Authentication**: [How users are authenticated]
- **Authorization**: [Permission model]
- **Data Encryption**: [At rest and in transit]
- **Privacy Compliance**: [GDPR, CCPA considerations]
- **Audit Logging**: [What actions are logged]

### Technical Constraints
{constraints}

### APIs & Integrations
- **Internal APIs**: [Services required]
- **External APIs**: [Third-party dependencies]
- **Webhooks**: [Event notifications]
- **Data Sync**: [Cross-system consistency]

### Dependencies
- **Upstream Dependencies**: [What must be completed first]
- **Downstream Dependencies**: [What depends on this]
- **Cross-Team Dependencies**: [Other teams involved]
",
        constraints = ctx.list_or(
            "technical_constraints",
            &["Performance", "Scalability", "Security"]
        ),
    )
}

fn ai_ml_specifications(ctx: &SectionContext<'_>) -> String {
    let reqs = AiMlRequirements::from_value(
        ctx.record.get("ai_ml_requirements").unwrap_or(&Value::Null),
    );
    format!(
        r"## AI/ML Specifications

### Model Requirements
- **Model Type**: {model_type}
- **Performance Targets**:
  - Accuracy: {accuracy}
  - Latency: {latency}
  - Throughput: {throughput}

### Data Requirements
- **Training Data**: {data}
- **Data Volume**: [Minimum dataset size]
- **Data Quality**: [Labeling accuracy requirements]
- **Data Freshness**: [How often to retrain]
- **Feature Engineering**: [Key features required]

### Bias & Fairness
- **Demographic Parity**: Model performs equally across user segments
- **Evaluation Criteria**: Test against protected attributes
- **Mitigation Strategy**: [How to address identified biases]
- **Monitoring**: [Ongoing fairness assessment]

### Explainability
- **User Visibility**: How users understand AI decisions
- **Feature Importance**: What factors influenced the prediction
- **Confidence Scores**: When to show uncertainty
- **Human Override**: When users can override AI

### Model Monitoring
- **Performance Tracking**: [Metrics to monitor]
- **Drift Detection**: [When to trigger retraining]
- **A/B Testing**: [Gradual rollout strategy]
- **Fallback Behavior**: [What happens if model fails]

### Ethical Considerations
- **Transparency**: Users know when AI is involved
- **Consent**: Users can opt-out of AI features
- **Privacy**: No PII used without explicit consent
- **Accountability**: Clear ownership of AI decisions
- **Regulatory Compliance**: [GDPR, AI Act, industry-specific]

### Responsible AI Checklist
✓ Fairness evaluated across demographics  
✓ Explainability provided to users  
✓ Privacy by design implemented  
✓ Security measures in place  
✓ Human oversight maintained  
✓ Feedback mechanisms enabled  
✓ Documentation complete  
",
        model_type = reqs.model_type,
        accuracy = reqs.accuracy_target,
        latency = reqs.latency_target,
        throughput = reqs.throughput_target,
        data = reqs.data_requirements,
    )
}

fn user_experience(_: &SectionContext<'_>) -> String {
    USER_EXPERIENCE.to_string()
}

fn risk_assessment(_: &SectionContext<'_>) -> String {
    RISK_ASSESSMENT.to_string()
}

fn launch_plan(_: &SectionContext<'_>) -> String {
    LAUNCH_PLAN.to_string()
}

/// RACI decision rights
fn stakeholder_matrix(_: &SectionContext<'_>) -> String {
    STAKEHOLDER_MATRIX.to_string()
}

fn appendix(ctx: &SectionContext<'_>) -> String {
    let meta = ctx.meta;
    format!(
        r"## Appendix

### User Research Summary
{research}

### Competitive Landscape
{competitive}

### Alternatives Considered
1. **Alternative 1**: [Description]
   - Pros: [Advantages]
   - Cons: [Disadvantages]
   - Why not chosen: [Reason]

2. **Alternative 2**: [Description]
   - Pros: [Advantages]
   - Cons: [Disadvantages]
   - Why not chosen: [Reason]

### Open Questions
- [ ] Question 1: [To be resolved by whom/when]
- [ ] Question 2: [To be resolved by whom/when]
- [ ] Question 3: [To be resolved by whom/when]

### References
- [User Research Report](#)
- [Competitive Analysis](#)
- [Technical Design Doc](#)
- [Design Spec](#)

### Revision History
| Version | Date | Author | Changes |
|---------|------|--------|---------|
| {version} | {date} | {author} | Initial draft |

---

*This PRD is a living document and will be updated as we learn more through development and user feedback.*
",
        research = ctx.text_or(
            "user_research_summary",
            "See separate user research document for detailed findings."
        ),
        competitive = ctx.text_or(
            "competitive_landscape",
            "See competitive analysis document for market positioning."
        ),
        version = meta.version,
        date = ctx.date.format("%Y-%m-%d"),
        author = meta.author,
    )
}

// =============================================================================
// Fixed sections
// =============================================================================

const FUNCTIONAL_REQUIREMENTS: &str = r"## Functional Requirements

### Must Have (MVP)
These features are essential for v1 launch:
1. **Core Functionality**: [Primary feature capability]
2. **User Onboarding**: [Introduction and guidance]
3. **Basic Analytics**: [Usage tracking and feedback]
4. **Error Handling**: [Graceful degradation]
5. **Documentation**: [Help content and FAQs]

### Should Have (Post-MVP)
Important features for v1.1-v1.2:
1. **Advanced Features**: [Enhanced capabilities]
2. **Customization**: [User preferences and settings]
3. **Integrations**: [Connect with other tools]
4. **Performance Optimization**: [Speed improvements]

### Could Have (Future)
Nice-to-have features for v2+:
1. **Premium Features**: [Advanced functionality]
2. **Collaboration**: [Multi-user capabilities]
3. **API Access**: [Programmatic interface]
4. **Mobile Optimization**: [Native mobile experience]

### Won't Have (Out of Scope)
Explicitly out of scope:
1. **Feature X**: [Reason for exclusion]
2. **Feature Y**: [Alternative approach]
3. **Feature Z**: [Deferred to future version]
";

const USER_EXPERIENCE: &str = r"## User Experience

### Key User Flows
1. **Discovery Flow**: How users find the feature
   - Entry points: [Navigation, notifications, recommendations]
   - First-time user experience: [Onboarding flow]
   
2. **Core Usage Flow**: Primary interaction pattern
   - Happy path: [Step-by-step ideal scenario]
   - Alternative paths: [Different ways to accomplish goal]
   
3. **Error Recovery Flow**: Handling failures gracefully
   - Error prevention: [Input validation]
   - Error messages: [Clear, actionable guidance]
   - Recovery options: [How users can resolve issues]

### Design Principles
- **Simplicity**: Progressive disclosure of complexity
- **Clarity**: Clear labeling and instructions
- **Feedback**: Immediate response to user actions
- **Consistency**: Aligned with design system
- **Accessibility**: WCAG 2.1 AA compliance

### Mobile Considerations
- Responsive design for all screen sizes
- Touch-optimized interactions
- Offline capability where appropriate
- Performance on slower networks

### Accessibility Requirements
- Screen reader compatibility
- Keyboard navigation support
- Color contrast compliance
- Alt text for images
- Captions for media
";

const RISK_ASSESSMENT: &str = r"## Risk Assessment

### Technical Risks
| Risk | Probability | Impact | Mitigation Strategy |
|------|-------------|--------|---------------------|
| Performance degradation | Medium | High | Load testing, incremental rollout |
| Integration failures | Low | High | Comprehensive testing, fallback plans |
| Data quality issues | Medium | Medium | Validation rules, monitoring |

### Product Risks
| Risk | Probability | Impact | Mitigation Strategy |
|------|-------------|--------|---------------------|
| Low user adoption | Medium | High | User research, pilot testing |
| Feature not solving problem | Low | Critical | Prototype validation, feedback loops |
| Competitive response | High | Medium | Speed to market, unique value props |

### Business Risks
| Risk | Probability | Impact | Mitigation Strategy |
|------|-------------|--------|---------------------|
| Resource constraints | Medium | High | Phased delivery, MVP scope |
| Market timing | Low | Medium | Competitive analysis, user research |
| Regulatory changes | Low | High | Legal review, compliance monitoring |

### Rollback Plan
If critical issues arise post-launch:
1. **Immediate**: Feature flag to disable for all users
2. **Within 1 hour**: Root cause analysis and decision to fix or rollback
3. **Within 24 hours**: Communication to affected users
4. **Within 1 week**: Resolution or permanent rollback with alternative plan
";

const LAUNCH_PLAN: &str = r"## Launch Plan

### Phase 1: Alpha (Internal)
- **Audience**: Internal team members (50 users)
- **Duration**: 2 weeks
- **Goals**: Validate core functionality, identify major bugs
- **Success Criteria**: < 5 P0 bugs, > 80% positive feedback

### Phase 2: Beta (Limited)
- **Audience**: Selected power users (500 users)
- **Duration**: 4 weeks
- **Goals**: Validate product-market fit, gather feedback
- **Success Criteria**: > 60% weekly active users, NPS > 40

### Phase 3: General Availability
- **Audience**: All eligible users (phased rollout)
- **Duration**: 4 weeks (25% → 50% → 75% → 100%)
- **Goals**: Scale safely, monitor metrics
- **Success Criteria**: Meet all primary KPIs, < 1% error rate

### Go/No-Go Criteria
Before proceeding to GA:
- ✓ All P0 and P1 bugs resolved
- ✓ Performance meets SLAs
- ✓ Security review approved
- ✓ Documentation complete
- ✓ Support team trained
- ✓ Monitoring and alerting in place
- ✓ Rollback plan tested

### Communication Plan
- **T-2 weeks**: Announce to internal stakeholders
- **T-1 week**: Email to beta users
- **Launch day**: Blog post, in-app announcement
- **T+1 week**: Results update to leadership
- **T+1 month**: Full retrospective
";

const STAKEHOLDER_MATRIX: &str = r"## Stakeholder Matrix (RACI)

### Decision Rights

| Decision | Responsible | Accountable | Consulted | Informed |
|----------|-------------|-------------|-----------|----------|
| Product vision | PM | CPO | Design, Eng | All stakeholders |
| Technical approach | Eng Lead | CTO | PM, Design | Product team |
| Design decisions | Designer | Design Lead | PM, Eng | Stakeholders |
| Launch timing | PM | CPO | Eng, Marketing | Company |
| Success metrics | PM | CPO | Data, Eng | Leadership |

### Approval Required From
- **Product scope**: CPO, VP Engineering
- **Design**: Design Lead
- **Technical architecture**: CTO, Principal Engineer
- **Security & Privacy**: Security Lead, Legal
- **Go-to-Market**: VP Marketing, VP Sales

### Communication Cadence
- **Weekly**: PM → Engineering team (standup updates)
- **Bi-weekly**: PM → Design team (review sessions)
- **Monthly**: PM → Leadership (progress reports)
- **Quarterly**: PM → Company (roadmap updates)
";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(id: SectionId, record: &InputRecord) -> String {
        let meta = DocumentMeta::default();
        let ctx = SectionContext {
            record,
            meta: &meta,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        };
        SECTIONS
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.render(&ctx))
            .unwrap()
    }

    #[test]
    fn test_section_order() {
        let ids: Vec<SectionId> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 14);
        assert_eq!(ids.first(), Some(&SectionId::Header));
        assert_eq!(ids[8], SectionId::AiMlSpecifications);
        assert_eq!(ids.last(), Some(&SectionId::Appendix));
    }

    #[test]
    fn test_only_ai_ml_is_conditional() {
        let conditional: Vec<SectionId> = SECTIONS
            .iter()
            .filter(|s| s.is_conditional())
            .map(|s| s.id)
            .collect();
        assert_eq!(conditional, vec![SectionId::AiMlSpecifications]);
    }

    #[test]
    fn test_header_fields() {
        let record = InputRecord::new().with("feature_name", "Smart Search");
        let header = render(SectionId::Header, &record);
        assert!(header.starts_with("# PRD: Smart Search\n"));
        assert!(header.contains("**Document Version**: 1.0.0  \n"));
        assert!(header.contains("**Last Updated**: March 05, 2024  \n"));
        assert!(header.contains("**Owner**: [Product Manager Name]"));
        assert!(header.ends_with("---\n"));
    }

    #[test]
    fn test_header_without_feature_name() {
        let header = render(SectionId::Header, &InputRecord::new());
        assert!(header.starts_with("# PRD: [Feature Name]\n"));
    }

    #[test]
    fn test_executive_summary_defaults() {
        let summary = render(SectionId::ExecutiveSummary, &InputRecord::new());
        assert!(summary.contains(
            "addresses the need for improved user experience among our users."
        ));
        assert!(summary.contains("- Improve user engagement\n- Drive revenue growth"));
        assert!(summary.contains("reach a significant portion of our user base"));
    }

    #[test]
    fn test_executive_summary_with_users_list() {
        let record = InputRecord::new()
            .with("target_users", json!(["Admins", "End users"]))
            .with("business_goals", json!(["Cut support tickets"]));
        let summary = render(SectionId::ExecutiveSummary, &record);
        assert!(summary.contains("among Admins, End users."));
        assert!(summary.contains("### Business Goals\n- Cut support tickets\n"));
    }

    #[test]
    fn test_opportunity_sizing_defaults() {
        let section = render(SectionId::OpportunitySizing, &InputRecord::new());
        assert!(section.contains("- **Reach**: 10,000 users affected per quarter"));
        assert!(section.contains("- **Impact**: 20.0% improvement in key metrics"));
        assert!(section.contains("- **Confidence**: 80% confidence in estimates"));
        assert!(section.contains("- **Effort**: 5 person-months"));
        assert!(section.contains("**RICE Score**: 320.0"));
    }

    #[test]
    fn test_opportunity_sizing_zero_effort() {
        let record = InputRecord::new().with("effort_estimate", 0);
        let section = render(SectionId::OpportunitySizing, &record);
        assert!(section.contains("**RICE Score**: 0.0"));
    }

    #[test]
    fn test_default_metrics_table() {
        let section = render(SectionId::SuccessMetrics, &InputRecord::new());
        assert!(section.contains(
            "| User Engagement | Current: X% | Target: Y% | 3 months post-launch | Weekly active usage rate |"
        ));
    }

    #[test]
    fn test_metrics_table_defaults_per_key() {
        let record = InputRecord::new().with(
            "success_metrics",
            json!([{"name": "Query latency", "target": "< 300ms"}, {}]),
        );
        let table = metrics_table(&record);
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2], "| Query latency | TBD | < 300ms | TBD | TBD |");
        assert_eq!(rows[3], "| Metric | TBD | TBD | TBD | TBD |");
    }

    #[test]
    fn test_technical_constraints() {
        let defaults = render(SectionId::TechnicalRequirements, &InputRecord::new());
        assert!(defaults.contains("### Technical Constraints\n- Performance\n- Scalability\n- Security\n"));

        let record = InputRecord::new().with("technical_constraints", json!(["Must run on-prem"]));
        let custom = render(SectionId::TechnicalRequirements, &record);
        assert!(custom.contains("### Technical Constraints\n- Must run on-prem\n"));
    }

    #[test]
    fn test_ai_ml_section_values() {
        let record = InputRecord::new().with(
            "ai_ml_requirements",
            json!({"model_type": "classifier", "latency_target": "< 50ms"}),
        );
        let section = render(SectionId::AiMlSpecifications, &record);
        assert!(section.starts_with("## AI/ML Specifications\n"));
        assert!(section.contains("- **Model Type**: classifier"));
        assert!(section.contains("  - Latency: < 50ms"));
        assert!(section.contains("  - Accuracy: > 90%"));
    }

    #[test]
    fn test_appendix_revision_history() {
        let section = render(SectionId::Appendix, &InputRecord::new());
        assert!(section.contains("| 1.0.0 | 2024-03-05 | PM | Initial draft |"));
        assert!(section.contains("See separate user research document for detailed findings."));
    }

    #[test]
    fn test_every_section_ends_with_newline() {
        let record = InputRecord::new().with("ai_ml_requirements", json!({"model_type": "llm"}));
        for section in SECTIONS {
            assert!(render(section.id, &record).ends_with('\n'), "{}", section.id);
        }
    }
}
