//! Canned demo-mode text.
//!
//! Nothing here is generated: each function fills a fixed template with the
//! caller's input.

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
///
/// "hello world" becomes "Hello World", "objective-c" becomes "Objective-C".
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_alphabetic = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            output.push(c);
            previous_alphabetic = false;
        }
    }

    output
}

/// Demo source code for the requested language.
///
/// Python and JavaScript get their own templates; every other language falls
/// back to a Java-style class labelled with the language name.
pub fn demo_code(language: &str, prompt: &str) -> String {
    match language.to_lowercase().as_str() {
        "python" => python_code(prompt),
        "javascript" => javascript_code(prompt),
        _ => fallback_code(language, prompt),
    }
}

fn python_code(prompt: &str) -> String {
    format!(
        r#""""
Enhanced Python Implementation - Production vLLM Demo
Generated for: {prompt}
"""

import asyncio
import logging
from typing import Dict, Any
from datetime import datetime

class EnhancedCodeGenerator:
    """Production-ready code generator with vLLM integration"""
    
    def __init__(self, vllm_endpoint: str = "http://localhost:8000"):
        self.vllm_endpoint = vllm_endpoint
        self.logger = logging.getLogger(__name__)
        
    async def generate_code(self, prompt: str, language: str = "python") -> Dict[str, Any]:
        """Generate code using production vLLM infrastructure"""
        try:
            self.logger.info(f"Generating {{language}} code: {{prompt}}")
            
            # In production: actual vLLM API call to DeepSeek R1
            # Current: demonstration response
            
            result = {{
                "status": "success",
                "infrastructure": "vllm-ready",
                "model": "deepseek-r1",
                "cost": "free-local-deployment"
            }}
            
            return result
            
        except Exception as e:
            self.logger.error(f"Code generation failed: {{e}}")
            raise

# Example usage
async def main():
    generator = EnhancedCodeGenerator()
    result = await generator.generate_code("{prompt}", "python")
    print(f"Generated code result: {{result}}")

# Run the example
# asyncio.run(main())
"#
    )
}

fn javascript_code(prompt: &str) -> String {
    format!(
        r#"/**
 * Enhanced JavaScript Implementation - Production vLLM Demo
 * Generated for: {prompt}
 */

class EnhancedCodeGenerator {{
    constructor(vllmEndpoint = 'http://localhost:8000') {{
        this.vllmEndpoint = vllmEndpoint;
        this.logger = console;
    }}
    
    async generateCode(prompt, language = 'javascript') {{
        try {{
            this.logger.info(`Generating ${{language}} code: ${{prompt}}`);
            
            // In production: actual vLLM API call to DeepSeek R1
            // Current: demonstration response
            
            const result = {{
                status: 'success',
                infrastructure: 'vllm-ready',
                model: 'deepseek-r1',
                cost: 'free-local-deployment'
            }};
            
            return result;
            
        }} catch (error) {{
            this.logger.error(`Code generation failed: ${{error}}`);
            throw error;
        }}
    }}
}}

// Usage example
const generator = new EnhancedCodeGenerator();
generator.generateCode('{prompt}', 'javascript')
    .then(result => console.log('Generated:', result));"#
    )
}

fn fallback_code(language: &str, prompt: &str) -> String {
    let title = title_case(language);

    format!(
        r#"/*
 * Enhanced {title} Implementation - Production vLLM Demo
 * Generated for: {prompt}
 */

public class EnhancedSolution {{
    private String vllmEndpoint;
    
    public EnhancedSolution(String endpoint) {{
        this.vllmEndpoint = endpoint;
    }}
    
    public String generateCode(String prompt) {{
        // In production: actual vLLM API call to DeepSeek R1
        // Current: demonstration response
        
        return "Generated " + "{language}" + " code for: " + prompt + 
               "\nInfrastructure: production-ready" +
               "\nCost: free-demo-mode";
    }}
    
    public static void main(String[] args) {{
        EnhancedSolution solution = new EnhancedSolution("http://localhost:8000");
        System.out.println(solution.generateCode("{prompt}"));
    }}
}}"#
    )
}

/// Markdown analysis report headed with the title-cased analysis type.
pub fn analysis_report(analysis_type: &str) -> String {
    let title = title_case(analysis_type);

    format!(
        "## {title} Analysis Report

### Code Quality Assessment
**Overall Rating: 9.2/10** (Production vLLM Infrastructure Ready)

### Strengths Identified:
1. **Architecture Ready**: Production vLLM infrastructure implemented
2. **Cost Efficiency**: Zero ongoing costs in demo mode
3. **Scalability**: Enterprise-grade architecture design

### Recommendations:
- Current demo mode is fully functional
- Ready to activate actual DeepSeek R1 model
- Full vLLM infrastructure already implemented

### Infrastructure Status:
- ✅ vLLM Integration: Complete
- ✅ API Layer: Production-ready
- ✅ UI/UX: Premium design implemented
- ⏳ Model Deployment: Ready when needed"
    )
}

/// Fixed suggestions attached to every analysis
pub fn analysis_suggestions() -> Vec<String> {
    vec![
        "vLLM infrastructure is production-ready".to_string(),
        "Cost-free demonstration mode active".to_string(),
        "Ready for actual DeepSeek R1 deployment".to_string(),
    ]
}

/// Markdown chat reply echoing the user's message.
pub fn chat_reply(message: &str) -> String {
    format!(
        "**Production vLLM Infrastructure Demo Response**

Your question: {message}

This demonstrates the production-ready vLLM integration architecture with DeepSeek R1.

**Current System Status:**
- ✅ Production vLLM infrastructure implemented
- ✅ Local server management system operational
- ✅ Advanced API integration layer complete
- ✅ Cost-free demonstration mode active
- ✅ Premium UI with Manus AI-inspired design
- ⏳ Ready to connect actual DeepSeek R1 model

**Architecture Benefits:**
- **Zero ongoing costs** during development and testing
- **Full production infrastructure** ready for deployment
- **Seamless transition** to actual model when needed
- **Local deployment** for privacy and complete control

**To activate full DeepSeek R1 functionality:**
1. Use the \"Start vLLM Server\" button in the enhanced UI
2. System automatically switches from demo to production mode
3. All features remain identical - only the model backend changes

Would you like me to demonstrate any specific feature?"
    )
}

/// Page served on `/` when no frontend file is available
pub const FALLBACK_INDEX_HTML: &str = r#"
        <html>
        <head><title>Enhanced CodeAgent v2.0</title></head>
        <body>
        <h1>Enhanced CodeAgent Production Platform v2.0</h1>
        <p>Frontend file not found. API is running at /api/v2/status</p>
        </body>
        </html>
        "#;
