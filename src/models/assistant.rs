//! The sales agent's script and voice, rendered into the voice-agent API's
//! assistant payload.

use serde::Serialize;

/// Greeting name used when a contact has no name.
pub const GREETING_NAME_FALLBACK: &str = "available";

/// Script and voice settings for the outbound sales agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfile {
    /// Assistant display name in the voice-agent dashboard
    pub assistant_name: String,
    /// Name the agent introduces itself with
    pub agent_name: String,
    pub company_name: String,
    pub product_name: String,
    pub key_benefits: Vec<String>,
    pub offer: String,
    pub call_goal: String,
    pub model_provider: String,
    pub model: String,
    pub temperature: f32,
    pub voice_provider: String,
    pub voice_id: String,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            assistant_name: "Sales Development Representative".to_string(),
            agent_name: "Alex".to_string(),
            company_name: "Our Company".to_string(),
            product_name: "Our Awesome Product/Service".to_string(),
            key_benefits: vec![
                "Saves you time".to_string(),
                "Increases your revenue".to_string(),
                "Simplifies your workflow".to_string(),
            ],
            offer: "We have a special introductory offer available this month.".to_string(),
            call_goal: "Determine if the potential client is interested in learning more and potentially schedule a brief follow-up call or demo.".to_string(),
            model_provider: "openai".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            voice_provider: "11labs".to_string(),
            voice_id: "josh".to_string(),
        }
    }
}

impl AgentProfile {
    /// System prompt describing the agent's role and conversation flow.
    pub fn system_prompt(&self) -> String {
        let company = &self.company_name;
        let product = &self.product_name;
        let goal = &self.call_goal;
        let benefits = self.key_benefits.join(", ");

        format!(
            "You are a friendly and professional Sales Development Representative (SDR) for {company}.
Your goal is to make outbound cold calls to potential clients listed in a database.
Your primary objective is: {goal}

Product/Service: {product}
Key Benefits: {benefits}.
Offer: {offer}

Conversation Flow:
1. Introduction: Introduce yourself and {company}. Briefly state the reason for your call.
2. Qualification/Discovery: Ask questions to understand their current situation, needs, and if {product} could be a good fit. Listen more than you talk.
3. Value Proposition: Briefly explain how {product} addresses their potential needs, highlighting relevant benefits ({benefits}).
4. Handle Objections: Address any concerns or questions professionally.
5. Call to Action: Based on the conversation, attempt to achieve the call goal. If they are interested, suggest next steps such as a 15-minute demo or sending more information. If not interested, thank them for their time politely.
6. Closing: End the call professionally.

Guidelines:
- Be polite, respectful, and empathetic.
- Do not be pushy.
- Keep the initial part of the call concise.
- Adapt to the client's responses.
- If asked a question you don't know, politely state you'll find out and follow up.
- Use the client's name if available.",
            offer = self.offer,
        )
    }

    /// Opening line, personalized with the contact's name when known.
    pub fn first_message(&self, display_name: Option<&str>) -> String {
        format!(
            "Hi, is this {}? This is {} calling from {}. How are you today?",
            display_name.unwrap_or(GREETING_NAME_FALLBACK),
            self.agent_name,
            self.company_name
        )
    }

    /// Full assistant definition for one call.
    pub fn assistant_for(&self, display_name: Option<&str>) -> AssistantSpec {
        AssistantSpec {
            name: self.assistant_name.clone(),
            model: ModelSpec {
                provider: self.model_provider.clone(),
                model: self.model.clone(),
                temperature: self.temperature,
                messages: vec![PromptMessage {
                    role: "system".to_string(),
                    content: self.system_prompt(),
                }],
            },
            voice: VoiceSpec {
                provider: self.voice_provider.clone(),
                voice_id: self.voice_id.clone(),
            },
            first_message: self.first_message(display_name),
        }
    }
}

/// Transient assistant sent inline with a call request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantSpec {
    pub name: String,
    pub model: ModelSpec,
    pub voice: VoiceSpec,
    pub first_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSpec {
    pub provider: String,
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<PromptMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSpec {
    pub provider: String,
    pub voice_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_with_and_without_name() {
        let profile = AgentProfile {
            agent_name: "Sam".to_string(),
            company_name: "Acme".to_string(),
            ..Default::default()
        };

        assert_eq!(
            profile.first_message(Some("Ada")),
            "Hi, is this Ada? This is Sam calling from Acme. How are you today?"
        );
        assert_eq!(
            profile.first_message(None),
            "Hi, is this available? This is Sam calling from Acme. How are you today?"
        );
    }

    #[test]
    fn test_system_prompt_mentions_profile() {
        let profile = AgentProfile {
            company_name: "Acme".to_string(),
            product_name: "Rocket Skates".to_string(),
            key_benefits: vec!["Fast".to_string(), "Fun".to_string()],
            ..Default::default()
        };

        let prompt = profile.system_prompt();
        assert!(prompt.contains("SDR) for Acme."));
        assert!(prompt.contains("Product/Service: Rocket Skates"));
        assert!(prompt.contains("Key Benefits: Fast, Fun."));
    }

    #[test]
    fn test_assistant_serialization_shape() {
        let assistant = AgentProfile::default().assistant_for(Some("Ada"));
        let json = serde_json::to_value(&assistant).unwrap();

        assert_eq!(json["name"], "Sales Development Representative");
        assert_eq!(json["model"]["provider"], "openai");
        assert_eq!(json["model"]["messages"][0]["role"], "system");
        assert_eq!(json["voice"]["voiceId"], "josh");
        assert!(json["firstMessage"]
            .as_str()
            .unwrap()
            .starts_with("Hi, is this Ada?"));
    }
}
